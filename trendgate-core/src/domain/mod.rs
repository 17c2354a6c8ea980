//! Domain types: bars, decisions, position state.

pub mod bar;
pub mod decision;

pub use bar::Bar;
pub use decision::{Decision, DecisionRecord, PositionState};
