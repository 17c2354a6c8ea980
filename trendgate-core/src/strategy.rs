//! Strategy state machine — golden cross entry, death cross or fixed
//! ATR stop exit.
//!
//! The machine is a pure transition function over `(PositionState, Bar,
//! current IndicatorState, previous IndicatorState)`. Precedence per bar:
//!
//! 1. not-ready guard (current snapshot unseeded) → forced no-op
//! 2. long and close <= stop → exit-stop
//! 3. long and death cross → exit-cross
//! 4. flat and golden cross → enter-long, stop = close - multiple * atr
//! 5. otherwise no-op
//!
//! The stop check runs before the cross check so a risk exit is never lost
//! to a reversal firing on the same bar. Cross comparisons are strict on one
//! side (`>` vs `<=`) so an exact fast == slow tie cannot fire both ways.
//! The one-bar lookback of (ema_fast, ema_slow) is the only history kept
//! beyond the current snapshot.
//!
//! On the first ready bar there is no seeded lookback pair. A trend that is
//! already up at that point counts as having crossed during warm-up, so the
//! machine may enter; the death-cross exit requires a real lookback pair.

use crate::config::StrategyParams;
use crate::domain::{Bar, Decision, PositionState};
use crate::indicators::IndicatorState;

/// The state machine plus its one-bar indicator lookback and parameters.
///
/// `on_bar` is what the fold runner drives; `step_with` is the underlying
/// transition for callers that manage their own lookback.
#[derive(Debug, Clone)]
pub struct Strategy {
    params: StrategyParams,
    state: PositionState,
    previous: IndicatorState,
}

impl Strategy {
    pub fn new(params: StrategyParams) -> Self {
        Self {
            params,
            state: PositionState::Flat,
            previous: IndicatorState::empty(),
        }
    }

    pub fn state(&self) -> PositionState {
        self.state
    }

    /// One step of the state machine, with an explicit previous snapshot.
    /// Pure: no I/O, no hidden state.
    pub fn step_with(
        params: &StrategyParams,
        state: PositionState,
        bar: &Bar,
        current: &IndicatorState,
        previous: &IndicatorState,
    ) -> (PositionState, Decision) {
        if !current.is_ready() {
            return (state, Decision::NoOp);
        }

        let fast = current.ema_fast.unwrap_or(f64::NAN);
        let slow = current.ema_slow.unwrap_or(f64::NAN);
        let atr = current.atr.unwrap_or(f64::NAN);
        // One-bar lookback. `None` on the first ready bar.
        let lookback = previous.ema_fast.zip(previous.ema_slow);

        match state {
            PositionState::Long { stop } => {
                if bar.close <= stop {
                    return (PositionState::Flat, Decision::ExitStop);
                }
                // Death cross needs a real lookback pair: fast was above,
                // now at or below.
                if let Some((fast_prev, slow_prev)) = lookback {
                    if fast_prev > slow_prev && fast <= slow {
                        return (PositionState::Flat, Decision::ExitCross);
                    }
                }
                (state, Decision::NoOp)
            }
            PositionState::Flat => {
                // Golden cross: fast was at or below (or unseeded — a trend
                // already up on the first ready bar counts), now above.
                let was_at_or_below = lookback.map_or(true, |(f, s)| f <= s);
                if was_at_or_below && fast > slow {
                    let stop = bar.close - params.atr_stop_multiple * atr;
                    (PositionState::Long { stop }, Decision::EnterLong { stop })
                } else {
                    (state, Decision::NoOp)
                }
            }
        }
    }

    /// Consume the next bar's indicator snapshot and emit a decision.
    pub fn on_bar(&mut self, bar: &Bar, current: &IndicatorState) -> Decision {
        let (next, decision) = Self::step_with(&self.params, self.state, bar, current, &self.previous);
        self.state = next;
        self.previous = *current;
        decision
    }
}
