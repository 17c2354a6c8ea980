//! Decisions emitted by the strategy state machine, and the position state
//! they drive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the strategy is in the market.
///
/// The stop level lives inside `Long` so it exists exactly as long as the
/// position does — there is no way to carry a stale stop while flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PositionState {
    Flat,
    Long { stop: f64 },
}

impl PositionState {
    pub fn is_long(&self) -> bool {
        matches!(self, PositionState::Long { .. })
    }

    /// Stop level, if a position is open.
    pub fn stop(&self) -> Option<f64> {
        match self {
            PositionState::Flat => None,
            PositionState::Long { stop } => Some(*stop),
        }
    }
}

/// One decision per bar. Everything except `NoOp` changes the position state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    /// Hold the current state (also forced while indicators warm up).
    NoOp,
    /// Golden cross while flat: go long with a fixed stop below the entry close.
    EnterLong { stop: f64 },
    /// Death cross while long: close the position.
    ExitCross,
    /// Close breached the stop while long: close the position.
    ExitStop,
}

impl Decision {
    /// True for anything that opens or closes a position.
    pub fn is_event(&self) -> bool {
        !matches!(self, Decision::NoOp)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Decision::ExitCross | Decision::ExitStop)
    }
}

/// A decision tagged with the triggering bar's date and close, as handed to
/// the downstream execution collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub date: NaiveDate,
    pub close: f64,
    pub decision: Decision,
}
