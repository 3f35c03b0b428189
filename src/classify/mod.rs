//! Decision rules over a single analysis record.
//!
//! - [`classify`]: four-indicator malicious/safe verdict
//! - [`is_field_risky`]: per-field highlighting, independent of the verdict
//! - [`resolve_ml_verdict`]: phishing/benign/indeterminate from ML scores

mod ml;
mod risk;
mod verdict;

pub use ml::{
    resolve_ml_verdict, MlVerdict, BENIGN_LABEL, ML_DECISION_THRESHOLD, PHISHING_LABEL,
};
pub use risk::{is_field_risky, is_key_risky, RiskRule};
pub use verdict::{classify, classify_optional, triggered_indicators, Verdict, VERDICT_INDICATORS};
