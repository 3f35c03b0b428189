//! Derived, presentation-ready views of records.

use std::fmt;

use serde::Serialize;

use crate::classify::{is_field_risky, resolve_ml_verdict, MlVerdict};
use crate::record::{AnalysisRecord, Field, FieldValue, FIELDS, LIST_SEPARATOR};

use super::time::format_timestamp;

/// Placeholder for absent or empty values.
pub const ABSENT: &str = "-";

/// An optional boolean as shown to the user.
///
/// `Unknown` means the service could not evaluate the check and must never
/// read as either answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriState {
    Yes,
    No,
    Unknown,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unknown,
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TriState::Yes => "Yes",
            TriState::No => "No",
            TriState::Unknown => "Unknown",
        })
    }
}

/// One row of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub label: String,
    pub value: String,
    pub risky: bool,
    pub explanation: Option<&'static str>,
}

/// Detail view of one record: every known field except `id`, in table order,
/// then any extra fields by key.
pub fn describe_record(record: &AnalysisRecord) -> Vec<FieldView> {
    let known = FIELDS
        .iter()
        .filter(|d| d.field != Field::Id)
        .map(|d| {
            let value = d.field.value(record);
            FieldView {
                label: d.label.to_string(),
                value: display_value(&value),
                risky: is_field_risky(d.field, &value),
                explanation: d.explanation,
            }
        });
    let extra = record.extra.iter().map(|(key, value)| FieldView {
        label: key.clone(),
        value: match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => ABSENT.to_string(),
            other => other.to_string(),
        },
        risky: false,
        explanation: None,
    });
    known.chain(extra).collect()
}

/// Human rendering of a field value (Yes/No, percentages, `-` for nothing).
pub fn display_value(value: &FieldValue<'_>) -> String {
    let or_absent = |s: String| if s.is_empty() { ABSENT.to_string() } else { s };
    match value {
        FieldValue::Flag(b) => TriState::from(Some(*b)).to_string(),
        FieldValue::OptionalFlag(b) => TriState::from(*b).to_string(),
        FieldValue::TextList(items) => or_absent(items.join(LIST_SEPARATOR)),
        FieldValue::Similarities(items) => or_absent(
            items
                .iter()
                .map(|s| format!("{} (distance {})", s.brand, s.distance))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
        ),
        FieldValue::MlScores(items) => or_absent(
            items
                .iter()
                .map(|s| format!("{}: {:.1}%", s.label, s.probability * 100.0))
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
        ),
        other => or_absent(other.render().unwrap_or_default()),
    }
}

/// One row of the history table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub id: Option<i64>,
    /// Formatted creation time, `-` when missing
    pub date: String,
    pub url: String,
    /// The status column follows the blacklist flag only
    pub blacklisted: bool,
    pub suspicious_numbers: bool,
    pub excessive_subdomains: bool,
    pub special_chars: bool,
    pub dynamic_dns: bool,
    pub ssl_valid: TriState,
    pub domain_age_days: Option<i64>,
    pub young_domain: bool,
    pub forms_found: u32,
    pub has_forms: bool,
    pub login_fields_found: bool,
    pub ml_verdict: MlVerdict,
}

impl HistoryRow {
    /// `"Malicious"` for blacklisted rows, `"Safe"` otherwise.
    pub fn status(&self) -> &'static str {
        if self.blacklisted {
            "Malicious"
        } else {
            "Safe"
        }
    }
}

/// Builds history table rows, preserving input order.
pub fn history_rows(records: &[AnalysisRecord], utc_offset_minutes: i32) -> Vec<HistoryRow> {
    records
        .iter()
        .map(|record| HistoryRow {
            id: record.id,
            date: record
                .timestamp
                .as_deref()
                .map(|ts| format_timestamp(ts, utc_offset_minutes))
                .unwrap_or_else(|| ABSENT.to_string()),
            url: record.url.clone(),
            blacklisted: record.blacklisted,
            suspicious_numbers: record.suspicious_numbers,
            excessive_subdomains: record.excessive_subdomains,
            special_chars: record.special_chars,
            dynamic_dns: record.dynamic_dns,
            ssl_valid: TriState::from(record.ssl_valid),
            domain_age_days: record.domain_age_days,
            young_domain: is_field_risky(
                Field::DomainAgeDays,
                &Field::DomainAgeDays.value(record),
            ),
            forms_found: record.forms_found,
            has_forms: is_field_risky(Field::FormsFound, &Field::FormsFound.value(record)),
            login_fields_found: record.login_fields_found,
            ml_verdict: resolve_ml_verdict(&record.ml_scores),
        })
        .collect()
}
