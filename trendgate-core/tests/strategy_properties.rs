//! Property tests for decision-stream invariants.
//!
//! Uses proptest to verify, over arbitrary close sequences:
//! 1. Entries and exits strictly alternate, starting with an entry
//! 2. The stop never moves while a position is open (no trailing)
//! 3. Warm-up streams produce only no-ops
//! 4. Determinism — identical inputs give identical decision streams

use proptest::prelude::*;
use trendgate_core::domain::{Bar, Decision};
use trendgate_core::indicators::IndicatorEngine;
// Renamed import: `Strategy` collides with proptest's trait of the same name.
use trendgate_core::strategy::Strategy as TrendStrategy;
use trendgate_core::{run_strategy, StrategyParams};

fn small_params() -> StrategyParams {
    StrategyParams {
        ema_fast_period: 3,
        ema_slow_period: 6,
        atr_period: 3,
        ..StrategyParams::default()
    }
}

/// Bars from arbitrary closes: open = previous close, high/low bracket both.
fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2022, 1, 3).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                symbol: "PROP".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 0.5,
                low: (open.min(close) - 0.5).max(0.01),
                close,
                volume: 10_000,
            }
        })
        .collect()
}

fn arb_closes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        (10.0..500.0_f64).prop_map(|c| (c * 100.0).round() / 100.0),
        0..max_len,
    )
}

proptest! {
    /// Entry and exit events strictly alternate; the first event is always
    /// an entry and there is never an entry while already long.
    #[test]
    fn entries_and_exits_alternate(closes in arb_closes(300)) {
        let bars = bars_from_closes(&closes);
        let result = run_strategy(&small_params(), &bars).unwrap();

        let mut long = false;
        for rec in &result.decisions {
            match rec.decision {
                Decision::EnterLong { .. } => {
                    prop_assert!(!long, "entered while already long at {}", rec.date);
                    long = true;
                }
                Decision::ExitCross | Decision::ExitStop => {
                    prop_assert!(long, "exited while flat at {}", rec.date);
                    long = false;
                }
                Decision::NoOp => {}
            }
        }
        prop_assert_eq!(long, result.final_state.is_long());
    }

    /// Once set at entry, the stop is constant for the life of the trade.
    #[test]
    fn stop_never_moves_while_long(closes in arb_closes(300)) {
        let params = small_params();
        let bars = bars_from_closes(&closes);
        let mut indicators = IndicatorEngine::new(&params);
        let mut strategy = TrendStrategy::new(params.clone());
        let mut entry_stop = None;

        for bar in &bars {
            let snapshot = indicators.update(bar);
            let decision = strategy.on_bar(bar, &snapshot);
            match decision {
                Decision::EnterLong { stop } => entry_stop = Some(stop),
                d if d.is_exit() => entry_stop = None,
                _ => {}
            }
            // While long, the live stop must equal the one set at entry.
            prop_assert_eq!(strategy.state().stop(), entry_stop);
        }
    }

    /// Streams shorter than the slow EMA period never leave warm-up.
    #[test]
    fn short_streams_emit_only_noops(closes in arb_closes(200)) {
        prop_assume!(closes.len() < 200);
        let bars = bars_from_closes(&closes);
        let result = run_strategy(&StrategyParams::default(), &bars).unwrap();
        prop_assert!(result.decisions.iter().all(|r| r.decision == Decision::NoOp));
    }

    /// Same bars, same parameters: byte-identical decision streams.
    #[test]
    fn reruns_are_deterministic(closes in arb_closes(300)) {
        let params = small_params();
        let bars = bars_from_closes(&closes);

        let a = run_strategy(&params, &bars).unwrap();
        let b = run_strategy(&params, &bars).unwrap();

        prop_assert_eq!(&a.fingerprint, &b.fingerprint);
        prop_assert_eq!(
            serde_json::to_vec(&a.decisions).unwrap(),
            serde_json::to_vec(&b.decisions).unwrap()
        );
    }

    /// A stop exit only fires at or below the recorded stop level.
    #[test]
    fn stop_exits_imply_breach(closes in arb_closes(300)) {
        let bars = bars_from_closes(&closes);
        let result = run_strategy(&small_params(), &bars).unwrap();

        let mut live_stop = None;
        for rec in &result.decisions {
            match rec.decision {
                Decision::EnterLong { stop } => live_stop = Some(stop),
                Decision::ExitStop => {
                    let stop = live_stop.take().expect("stop exit without entry");
                    prop_assert!(rec.close <= stop, "exit-stop at {} above stop {}", rec.close, stop);
                }
                Decision::ExitCross => {
                    live_stop = None;
                }
                Decision::NoOp => {}
            }
        }
    }
}
