//! Indicator engine — the three running values the trading rule reads.
//!
//! Purely numeric: the engine knows nothing about position state. Each bar
//! updates fast EMA, slow EMA, and ATR and yields an `IndicatorState`
//! snapshot whose fields are `None` until their recurrences are seeded.

use serde::{Deserialize, Serialize};

use crate::config::StrategyParams;
use crate::domain::Bar;
use crate::indicators::{Atr, Ema};

/// Snapshot of the three indicator values after one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorState {
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub atr: Option<f64>,
}

impl IndicatorState {
    /// All three recurrences seeded. Callers must not act on a state that
    /// isn't ready.
    pub fn is_ready(&self) -> bool {
        self.ema_fast.is_some() && self.ema_slow.is_some() && self.atr.is_some()
    }

    /// The not-ready state before any bar has been seen.
    pub fn empty() -> Self {
        Self {
            ema_fast: None,
            ema_slow: None,
            atr: None,
        }
    }
}

/// Maintains running EMA(fast), EMA(slow), and ATR values over a bar stream.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    ema_fast: Ema,
    ema_slow: Ema,
    atr: Atr,
}

impl IndicatorEngine {
    pub fn new(params: &StrategyParams) -> Self {
        Self {
            ema_fast: Ema::new(params.ema_fast_period),
            ema_slow: Ema::new(params.ema_slow_period),
            atr: Atr::new(params.atr_period),
        }
    }

    /// Bars before all three indicators are seeded. The slow EMA dominates
    /// with the default parameters.
    pub fn warmup_bars(&self) -> usize {
        self.ema_fast
            .warmup_bars()
            .max(self.ema_slow.warmup_bars())
            .max(self.atr.warmup_bars())
    }

    /// Feed the next bar and return the updated snapshot.
    pub fn update(&mut self, bar: &Bar) -> IndicatorState {
        IndicatorState {
            ema_fast: self.ema_fast.update(bar.close),
            ema_slow: self.ema_slow.update(bar.close),
            atr: self.atr.update(bar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    fn small_params() -> StrategyParams {
        StrategyParams {
            ema_fast_period: 3,
            ema_slow_period: 5,
            atr_period: 2,
            ..StrategyParams::default()
        }
    }

    #[test]
    fn not_ready_until_slow_ema_seeds() {
        let params = small_params();
        let mut engine = IndicatorEngine::new(&params);
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);

        for (i, bar) in bars.iter().enumerate() {
            let state = engine.update(bar);
            if i < 4 {
                assert!(!state.is_ready(), "bar {i} should not be ready");
            } else {
                assert!(state.is_ready(), "bar {i} should be ready");
            }
        }
    }

    #[test]
    fn warmup_is_max_of_periods() {
        let engine = IndicatorEngine::new(&small_params());
        assert_eq!(engine.warmup_bars(), 5);

        let engine = IndicatorEngine::new(&StrategyParams::default());
        assert_eq!(engine.warmup_bars(), 200);
    }

    #[test]
    fn components_seed_independently() {
        let params = small_params();
        let mut engine = IndicatorEngine::new(&params);
        let bars = make_bars(&[10.0, 11.0, 12.0, 13.0]);

        let mut last = IndicatorState::empty();
        for bar in &bars {
            last = engine.update(bar);
        }
        // 4 bars: fast EMA (3) and ATR (2) seeded, slow EMA (5) not yet.
        assert!(last.ema_fast.is_some());
        assert!(last.atr.is_some());
        assert!(last.ema_slow.is_none());
        assert!(!last.is_ready());
    }

    #[test]
    fn empty_state_is_not_ready() {
        assert!(!IndicatorState::empty().is_ready());
    }
}
