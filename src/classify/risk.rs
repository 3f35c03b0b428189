//! Per-field risk highlighting.
//!
//! Each field carries at most one [`RiskRule`] in the descriptor table. The
//! rule only looks at that field's value, never at the rest of the record.

use serde_json::Value;

use crate::record::{Field, FieldValue};

/// Rule deciding whether a single field value is highlighted as risky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    /// Risky when the flag is set
    WhenTrue,
    /// Risky only when explicitly `false`; unknown is not evidence of risk
    WhenExplicitlyFalse,
    /// Risky when the value is present and strictly below the threshold
    YoungerThanDays(i64),
    /// Risky when the count is strictly greater than zero
    Positive,
    /// Risky when the list has at least one entry
    NonEmpty,
}

impl RiskRule {
    /// Applies the rule to a typed field value. Mismatched shapes are never risky.
    pub fn matches(self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (RiskRule::WhenTrue, FieldValue::Flag(b)) => *b,
            (RiskRule::WhenTrue, FieldValue::OptionalFlag(b)) => *b == Some(true),
            (RiskRule::WhenExplicitlyFalse, FieldValue::Flag(b)) => !*b,
            (RiskRule::WhenExplicitlyFalse, FieldValue::OptionalFlag(b)) => *b == Some(false),
            (RiskRule::YoungerThanDays(limit), FieldValue::Integer(Some(days))) => *days < limit,
            (RiskRule::Positive, FieldValue::Integer(Some(n))) => *n > 0,
            (RiskRule::NonEmpty, FieldValue::TextList(items)) => !items.is_empty(),
            (RiskRule::NonEmpty, FieldValue::Similarities(items)) => !items.is_empty(),
            (RiskRule::NonEmpty, FieldValue::MlScores(items)) => !items.is_empty(),
            _ => false,
        }
    }

    /// Applies the rule to a raw JSON value, as received on the wire.
    pub fn matches_json(self, value: &Value) -> bool {
        match self {
            RiskRule::WhenTrue => value.as_bool() == Some(true),
            RiskRule::WhenExplicitlyFalse => value.as_bool() == Some(false),
            RiskRule::YoungerThanDays(limit) => value.as_i64().is_some_and(|days| days < limit),
            RiskRule::Positive => value.as_f64().is_some_and(|n| n > 0.0),
            RiskRule::NonEmpty => value.as_array().is_some_and(|items| !items.is_empty()),
        }
    }
}

/// Whether `value` of `field` should be highlighted as risky.
pub fn is_field_risky(field: Field, value: &FieldValue<'_>) -> bool {
    field
        .descriptor()
        .risk
        .is_some_and(|rule| rule.matches(value))
}

/// Same rule as [`is_field_risky`], addressed by wire name with a raw JSON
/// value. Unknown names are never risky.
pub fn is_key_risky(name: &str, value: &Value) -> bool {
    Field::from_name(name)
        .and_then(|field| field.descriptor().risk)
        .is_some_and(|rule| rule.matches_json(value))
}
