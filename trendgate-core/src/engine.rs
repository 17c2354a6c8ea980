//! Fold runner — one strict sequential pass over the bar stream.
//!
//! Per bar: validate (monotonic date, sane OHLC) → update the indicator
//! engine → step the strategy → record the decision. Nothing is parallel
//! and nothing is deferred; each bar is fully resolved before the next is
//! admitted. Re-running the same bars with the same parameters yields a
//! byte-identical decision stream.

use serde::{Deserialize, Serialize};

use crate::config::StrategyParams;
use crate::domain::{Bar, Decision, DecisionRecord, PositionState};
use crate::error::EngineError;
use crate::fingerprint::decision_fingerprint;
use crate::indicators::IndicatorEngine;
use crate::strategy::Strategy;

/// Complete output of one run, serializable for the execution collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub symbol: String,
    pub params: StrategyParams,
    pub decisions: Vec<DecisionRecord>,
    /// Final position state after the last bar. A still-open position is
    /// the collaborator's problem to mark or close.
    pub final_state: PositionState,
    pub bar_count: usize,
    /// Bars consumed to seed all indicators; the first actionable snapshot
    /// appears on the `warmup_bars`-th bar (capped at `bar_count`).
    pub warmup_bars: usize,
    /// blake3 hash of the decision stream; equal configs + equal bars must
    /// produce equal fingerprints.
    pub fingerprint: String,
}

impl RunResult {
    pub fn entries(&self) -> usize {
        self.decisions
            .iter()
            .filter(|r| matches!(r.decision, Decision::EnterLong { .. }))
            .count()
    }

    pub fn exits(&self) -> usize {
        self.decisions.iter().filter(|r| r.decision.is_exit()).count()
    }
}

/// Run the trend rule over an ordered bar stream.
///
/// Fails fast on invalid parameters and rejects malformed bars before they
/// reach the indicator engine. An empty stream is a valid run with zero
/// decisions.
pub fn run_strategy(params: &StrategyParams, bars: &[Bar]) -> Result<RunResult, EngineError> {
    params.validate()?;

    let mut indicators = IndicatorEngine::new(params);
    let mut strategy = Strategy::new(params.clone());
    let mut decisions = Vec::with_capacity(bars.len());
    let mut prev_date = None;

    for (index, bar) in bars.iter().enumerate() {
        if !bar.is_sane() {
            return Err(EngineError::MalformedBar {
                index,
                date: bar.date,
                reason: "OHLC fields missing, NaN, or inconsistent".into(),
            });
        }
        if let Some(prev) = prev_date {
            if bar.date <= prev {
                return Err(EngineError::MalformedBar {
                    index,
                    date: bar.date,
                    reason: format!("date not strictly increasing (previous {prev})"),
                });
            }
        }
        prev_date = Some(bar.date);

        let snapshot = indicators.update(bar);
        let decision = strategy.on_bar(bar, &snapshot);
        decisions.push(DecisionRecord {
            date: bar.date,
            close: bar.close,
            decision,
        });
    }

    let fingerprint = decision_fingerprint(&decisions);
    Ok(RunResult {
        symbol: bars.first().map(|b| b.symbol.clone()).unwrap_or_default(),
        params: params.clone(),
        decisions,
        final_state: strategy.state(),
        bar_count: bars.len(),
        warmup_bars: indicators.warmup_bars().min(bars.len()),
        fingerprint,
    })
}
