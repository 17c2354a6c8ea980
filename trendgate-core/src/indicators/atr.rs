//! Average True Range (ATR), streaming form.
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|).
//! First bar has no previous close, so TR = high - low; that value does
//! participate in the seed window, making the ATR ready after `period` bars.
//! Smoothing is Wilder's method: alpha = 1/period, seeded with the simple
//! mean of the first `period` true ranges. (Wilder vs. plain rolling mean
//! changes exact stop prices; Wilder is the documented choice here.)

use crate::domain::Bar;

/// Streaming Wilder-smoothed ATR.
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    alpha: f64,
    prev_close: Option<f64>,
    seed_sum: f64,
    seen: usize,
    current: Option<f64>,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ATR period must be >= 1");
        Self {
            period,
            alpha: 1.0 / period as f64,
            prev_close: None,
            seed_sum: 0.0,
            seen: 0,
            current: None,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Bars required before the first `Some` output.
    pub fn warmup_bars(&self) -> usize {
        self.period
    }

    /// True range of `bar` given the retained previous close.
    fn true_range(&self, bar: &Bar) -> f64 {
        match self.prev_close {
            None => bar.high - bar.low,
            Some(pc) => (bar.high - bar.low)
                .max((bar.high - pc).abs())
                .max((bar.low - pc).abs()),
        }
    }

    /// Feed the next bar; returns the updated ATR, or `None` while seeding.
    pub fn update(&mut self, bar: &Bar) -> Option<f64> {
        let tr = self.true_range(bar);
        self.prev_close = Some(bar.close);
        self.seen += 1;

        match self.current {
            Some(prev) => {
                let atr = self.alpha * tr + (1.0 - self.alpha) * prev;
                self.current = Some(atr);
            }
            None => {
                self.seed_sum += tr;
                if self.seen == self.period {
                    self.current = Some(self.seed_sum / self.period as f64);
                }
            }
        }
        self.current
    }

    /// Last output without feeding a new bar.
    pub fn value(&self) -> Option<f64> {
        self.current
    }
}
