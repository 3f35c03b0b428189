//! Schema checks for records received from the analysis service.
//!
//! The service is trusted input, so a violation is reported rather than
//! treated as fatal. The client decides whether to log or reject.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::types::AnalysisRecord;
use crate::error_handling::SchemaViolation;

/// Naive formats the service emits for datetimes without an offset.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 instant.
///
/// Accepts RFC 3339 (with offset), naive `YYYY-MM-DDTHH:MM:SS[.f]` and plain
/// `YYYY-MM-DD` dates. Naive values are taken as UTC, which is how the service
/// stamps them.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Checks a single record against the schema invariants.
///
/// Returns every violation found; an empty vector means the record is valid.
pub fn validate_record(record: &AnalysisRecord) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    for (index, score) in record.ml_scores.iter().enumerate() {
        if !(0.0..=1.0).contains(&score.probability) {
            violations.push(SchemaViolation::ProbabilityOutOfRange {
                index,
                label: score.label.clone(),
                probability: score.probability,
            });
        }
    }

    if let (false, Some(source)) = (record.blacklisted, record.blacklist_source.as_ref()) {
        violations.push(SchemaViolation::SourceWithoutBlacklist {
            blacklist_source: source.clone(),
        });
    }

    if let Some(days) = record.domain_age_days.filter(|days| *days < 0) {
        violations.push(SchemaViolation::NegativeDomainAge(days));
    }

    let dates = [
        ("timestamp", record.timestamp.as_deref()),
        ("domain_creation_date", record.domain_creation_date.as_deref()),
        ("ssl_expiration_date", record.ssl_expiration_date.as_deref()),
    ];
    for (field, value) in dates {
        if let Some(value) = value.filter(|v| parse_instant(v).is_none()) {
            violations.push(SchemaViolation::UnparsableDate {
                field,
                value: value.to_string(),
            });
        }
    }

    violations
}

/// Checks a history collection: every record, plus `id` uniqueness.
pub fn validate_history(records: &[AnalysisRecord]) -> Vec<SchemaViolation> {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();
    for record in records {
        violations.extend(validate_record(record));
        if let Some(id) = record.id {
            if !seen.insert(id) {
                violations.push(SchemaViolation::DuplicateId(id));
            }
        }
    }
    violations
}
