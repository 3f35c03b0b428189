//! Top-level malicious/safe verdict for a single record.

use serde::Serialize;

use crate::record::{AnalysisRecord, Field, FieldValue};

/// Binary outcome for one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Malicious,
    Safe,
}

impl Verdict {
    pub fn is_malicious(self) -> bool {
        self == Verdict::Malicious
    }

    /// Heading shown above a single analysis.
    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Malicious => "Possibly malicious",
            Verdict::Safe => "Possibly safe",
        }
    }
}

/// The four indicators that decide the verdict, in evaluation order.
///
/// Domain age, TLS status, redirects and ML scores are informational only and
/// deliberately absent here.
pub const VERDICT_INDICATORS: [Field; 4] = [
    Field::Blacklisted,
    Field::SuspiciousNumbers,
    Field::ExcessiveSubdomains,
    Field::SpecialChars,
];

/// Classifies a record: `Malicious` iff any verdict indicator is set.
pub fn classify(record: &AnalysisRecord) -> Verdict {
    if record.blacklisted
        || record.suspicious_numbers
        || record.excessive_subdomains
        || record.special_chars
    {
        Verdict::Malicious
    } else {
        Verdict::Safe
    }
}

/// Classifies an optional record. No record means no analysis yet, which is
/// not the same as `Safe`.
pub fn classify_optional(record: Option<&AnalysisRecord>) -> Option<Verdict> {
    record.map(classify)
}

/// Verdict indicators that are set on `record`, in [`VERDICT_INDICATORS`] order.
pub fn triggered_indicators(record: &AnalysisRecord) -> Vec<Field> {
    VERDICT_INDICATORS
        .iter()
        .copied()
        .filter(|field| field.value(record) == FieldValue::Flag(true))
        .collect()
}
