//! Content-addressed fingerprints for runs.
//!
//! Two runs with identical parameters and identical bars must produce
//! identical decision streams; hashing the serialized stream makes that
//! property checkable from the outside.

use crate::config::StrategyParams;
use crate::domain::DecisionRecord;

/// Deterministic hash of the strategy parameters.
pub fn params_fingerprint(params: &StrategyParams) -> String {
    let json = serde_json::to_string(params).expect("StrategyParams serialization failed");
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// Deterministic hash of a decision stream.
pub fn decision_fingerprint(decisions: &[DecisionRecord]) -> String {
    let json = serde_json::to_string(decisions).expect("DecisionRecord serialization failed");
    blake3::hash(json.as_bytes()).to_hex().to_string()
}
