//! Error taxonomy.
//!
//! Deliberately narrow: configuration problems fail fast before any bar is
//! processed; malformed bars are rejected before the indicator engine sees
//! them; indicator warm-up ("not ready") is not an error at all — it is the
//! `None` branch of indicator output and forces a no-op in the state machine.

use chrono::NaiveDate;
use thiserror::Error;

/// Invalid strategy parameters. Checked at configuration time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be >= 1 (got {value})")]
    NonPositivePeriod { name: &'static str, value: usize },

    #[error("ema_fast_period ({fast}) must be < ema_slow_period ({slow})")]
    FastNotBelowSlow { fast: usize, slow: usize },

    #[error("atr_stop_multiple must be positive and finite (got {0})")]
    InvalidStopMultiple(f64),

    #[error("position_fraction must be in (0, 1] (got {0})")]
    InvalidPositionFraction(f64),
}

/// Bad input data encountered while loading bars.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("row {row} in {path}: {reason}")]
    BadRow {
        path: String,
        row: usize,
        reason: String,
    },
}

/// Failures while running the strategy over a bar stream.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The bar stream violated its contract. The core rejects rather than
    /// repairs: no interpolation, no reordering.
    #[error("malformed bar at index {index} ({date}): {reason}")]
    MalformedBar {
        index: usize,
        date: NaiveDate,
        reason: String,
    },
}
