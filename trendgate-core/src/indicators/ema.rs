//! Exponential Moving Average (EMA), streaming form.
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1]
//! Seed: EMA[period-1] = SMA of first `period` close values.
//! Output is `None` until the seed forms.

/// Streaming EMA over a close-price series.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    alpha: f64,
    // Running sum of the seed window; drained once the seed forms.
    seed_sum: f64,
    seen: usize,
    current: Option<f64>,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            alpha: 2.0 / (period as f64 + 1.0),
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

    /// Feed the next close; returns the updated EMA, or `None` while seeding.
    pub fn update(&mut self, close: f64) -> Option<f64> {
        self.seen += 1;
        match self.current {
            Some(prev) => {
                let ema = self.alpha * close + (1.0 - self.alpha) * prev;
                self.current = Some(ema);
            }
            None => {
                self.seed_sum += close;
                if self.seen == self.period {
                    self.current = Some(self.seed_sum / self.period as f64);
                }
            }
        }
        self.current
    }

    /// Last output without feeding a new close.
    pub fn value(&self) -> Option<f64> {
        self.current
    }
}
