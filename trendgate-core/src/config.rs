//! Strategy parameters — static for the life of a run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters of the trend rule. All fixed at configuration time; none are
/// tunable mid-stream.
///
/// `position_fraction` is not consumed by the state machine itself — it is
/// surfaced in the run result for the execution collaborator that applies
/// capital allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyParams {
    /// Fast EMA period (default 50).
    pub ema_fast_period: usize,
    /// Slow EMA period (default 200).
    pub ema_slow_period: usize,
    /// ATR period for the stop distance (default 14).
    pub atr_period: usize,
    /// Stop distance in ATR multiples below the entry close (default 8).
    pub atr_stop_multiple: f64,
    /// Fraction of capital the collaborator should deploy per entry (default 0.95).
    pub position_fraction: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            ema_fast_period: 50,
            ema_slow_period: 200,
            atr_period: 14,
            atr_stop_multiple: 8.0,
            position_fraction: 0.95,
        }
    }
}

impl StrategyParams {
    /// Fail-fast validation, run before any bar is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ema_fast_period == 0 {
            return Err(ConfigError::NonPositivePeriod {
                name: "ema_fast_period",
                value: self.ema_fast_period,
            });
        }
        if self.ema_slow_period == 0 {
            return Err(ConfigError::NonPositivePeriod {
                name: "ema_slow_period",
                value: self.ema_slow_period,
            });
        }
        if self.atr_period == 0 {
            return Err(ConfigError::NonPositivePeriod {
                name: "atr_period",
                value: self.atr_period,
            });
        }
        if self.ema_fast_period >= self.ema_slow_period {
            return Err(ConfigError::FastNotBelowSlow {
                fast: self.ema_fast_period,
                slow: self.ema_slow_period,
            });
        }
        if !self.atr_stop_multiple.is_finite() || self.atr_stop_multiple <= 0.0 {
            return Err(ConfigError::InvalidStopMultiple(self.atr_stop_multiple));
        }
        if !self.position_fraction.is_finite()
            || self.position_fraction <= 0.0
            || self.position_fraction > 1.0
        {
            return Err(ConfigError::InvalidPositionFraction(self.position_fraction));
        }
        Ok(())
    }

    /// Load and validate parameters from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ParamsLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| ParamsLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let params: StrategyParams =
            toml::from_str(&text).map_err(|source| ParamsLoadError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        params.validate()?;
        Ok(params)
    }
}

/// Errors from loading a params file.
#[derive(Debug, thiserror::Error)]
pub enum ParamsLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] crate::error::ConfigError),
}
