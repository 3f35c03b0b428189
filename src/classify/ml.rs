//! Reduction of the service's ML scores to a single label.

use serde::Serialize;

use crate::record::MlScore;

pub const PHISHING_LABEL: &str = "phishing";
pub const BENIGN_LABEL: &str = "benign";

/// A label qualifies only when its probability is strictly above this.
pub const ML_DECISION_THRESHOLD: f64 = 0.5;

/// Outcome of [`resolve_ml_verdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MlVerdict {
    Phishing,
    Benign,
    Indeterminate,
}

impl MlVerdict {
    pub fn label(self) -> &'static str {
        match self {
            MlVerdict::Phishing => "Phishing",
            MlVerdict::Benign => "Safe",
            MlVerdict::Indeterminate => "-",
        }
    }
}

fn qualifies(scores: &[MlScore], label: &str) -> bool {
    scores
        .iter()
        .any(|s| s.label == label && s.probability > ML_DECISION_THRESHOLD)
}

/// Resolves a list of (label, probability) pairs.
///
/// `Phishing` wins whenever any phishing entry is above the threshold, even if
/// a benign entry is too. Empty lists, sub-threshold probabilities and
/// unrecognized labels resolve to `Indeterminate`; this never fails.
pub fn resolve_ml_verdict(scores: &[MlScore]) -> MlVerdict {
    if qualifies(scores, PHISHING_LABEL) {
        MlVerdict::Phishing
    } else if qualifies(scores, BENIGN_LABEL) {
        MlVerdict::Benign
    } else {
        MlVerdict::Indeterminate
    }
}
