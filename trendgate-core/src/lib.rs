//! TrendGate Core — a single trend-following rule as a decision stream.
//!
//! The crate answers one question per daily bar: fully invested or flat?
//! It contains:
//! - Domain types (bars, decisions, position state)
//! - Incremental indicators (fast/slow EMA, Wilder ATR) with explicit
//!   tri-state readiness
//! - The strategy state machine (golden cross entry, death cross or fixed
//!   8×ATR stop exit, stop checked first)
//! - A strict sequential fold runner producing a serializable `RunResult`
//! - Bar sources (CSV, deterministic synthetic) and run fingerprints
//!
//! Fills, commissions, sizing mechanics, and reporting belong to the
//! downstream execution collaborator that consumes the decision stream.

pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod indicators;
pub mod strategy;

pub use config::StrategyParams;
pub use domain::{Bar, Decision, DecisionRecord, PositionState};
pub use engine::{run_strategy, RunResult};
pub use error::{ConfigError, DataError, EngineError};
pub use indicators::{IndicatorEngine, IndicatorState};
pub use strategy::Strategy;
