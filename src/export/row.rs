//! Column layout shared by the tabular exporters.
//!
//! Known columns come from the field-descriptor table, so adding a field to
//! the schema adds a column here. Unknown service fields become trailing
//! columns named after their wire key.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::record::{AnalysisRecord, FieldValue, FIELDS};

/// Largest integer an f64 spreadsheet cell holds exactly.
const MAX_EXACT_NUMBER: u64 = 1 << 53;

/// One typed cell of an export row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Bool(bool),
    Number(f64),
}

impl Cell {
    fn from_value(value: &FieldValue<'_>) -> Self {
        match value {
            FieldValue::Flag(b) => Cell::Bool(*b),
            FieldValue::OptionalFlag(Some(b)) => Cell::Bool(*b),
            FieldValue::Integer(Some(n)) if n.unsigned_abs() <= MAX_EXACT_NUMBER => {
                Cell::Number(*n as f64)
            }
            other => other.render().map_or(Cell::Empty, Cell::Text),
        }
    }

    /// Text form used by the CSV writer. Empty cells are empty strings.
    pub fn into_text(self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s,
            Cell::Bool(b) => b.to_string(),
            Cell::Number(n) => format!("{n}"),
        }
    }
}

/// Columns for one export: the descriptor table plus the union of extras.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayout {
    extra_columns: Vec<String>,
}

impl ExportLayout {
    /// Builds the layout for `records`. Extra keys are sorted by name.
    pub fn for_records(records: &[AnalysisRecord]) -> Self {
        let extra_columns: BTreeSet<&String> = records
            .iter()
            .flat_map(|record| record.extra.keys())
            .collect();
        Self {
            extra_columns: extra_columns.into_iter().cloned().collect(),
        }
    }

    /// Number of columns in every row.
    pub fn width(&self) -> usize {
        FIELDS.len() + self.extra_columns.len()
    }

    /// Extra columns, in output order.
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// Header row: wire names, then extra keys.
    pub fn header(&self) -> Vec<&str> {
        FIELDS
            .iter()
            .map(|d| d.field.name())
            .chain(self.extra_columns.iter().map(String::as_str))
            .collect()
    }

    /// One typed row. Absent values are [`Cell::Empty`].
    pub fn cells(&self, record: &AnalysisRecord) -> Vec<Cell> {
        let mut row = Vec::with_capacity(self.width());
        row.extend(
            FIELDS
                .iter()
                .map(|d| Cell::from_value(&d.field.value(record))),
        );
        row.extend(self.extra_columns.iter().map(|key| {
            record
                .extra
                .get(key)
                .map_or(Cell::Empty, |value| Cell::Text(render_extra(value)))
        }));
        row
    }

    /// One flattened text row. Absent values are empty strings.
    pub fn row(&self, record: &AnalysisRecord) -> Vec<String> {
        self.cells(record).into_iter().map(Cell::into_text).collect()
    }
}

/// Extras are written as compact JSON, so a string stays quoted and an
/// explicit `null` differs from a missing key (empty cell).
fn render_extra(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_extra(pairs: &[(&str, Value)]) -> AnalysisRecord {
        let mut record = AnalysisRecord {
            url: "http://example.com".into(),
            ..Default::default()
        };
        for (key, value) in pairs {
            record.extra.insert((*key).to_string(), value.clone());
        }
        record
    }

    #[test]
    fn test_layout_without_extras_matches_table() {
        let layout = ExportLayout::for_records(&[AnalysisRecord::default()]);
        assert_eq!(layout.width(), FIELDS.len());
        assert_eq!(layout.header().first(), Some(&"url"));
        assert_eq!(layout.header().last(), Some(&"timestamp"));
    }

    #[test]
    fn test_extra_columns_are_union_sorted() {
        let records = vec![
            with_extra(&[("zeta", json!(1))]),
            with_extra(&[("alpha", json!("a")), ("zeta", json!(2))]),
        ];
        let layout = ExportLayout::for_records(&records);
        assert_eq!(layout.extra_columns(), ["alpha", "zeta"]);
        assert_eq!(layout.width(), FIELDS.len() + 2);
    }

    #[test]
    fn test_missing_extra_is_empty_cell() {
        let records = vec![with_extra(&[("page_title", json!("Login"))]), with_extra(&[])];
        let layout = ExportLayout::for_records(&records);
        assert_eq!(layout.row(&records[0]).last().map(String::as_str), Some(r#""Login""#));
        assert_eq!(layout.row(&records[1]).last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_render_extra_values() {
        assert_eq!(render_extra(&json!("plain")), r#""plain""#);
        assert_eq!(render_extra(&json!(null)), "null");
        assert_eq!(render_extra(&json!(3.5)), "3.5");
        assert_eq!(render_extra(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_cells_are_typed() {
        let record = AnalysisRecord {
            url: "http://example.com".into(),
            blacklisted: true,
            ssl_valid: None,
            domain_age_days: Some(12),
            forms_found: 3,
            ..Default::default()
        };
        let layout = ExportLayout::for_records(std::slice::from_ref(&record));
        let cells = layout.cells(&record);
        let cell = |name: &str| {
            let idx = layout
                .header()
                .iter()
                .position(|h| *h == name)
                .expect("column");
            cells[idx].clone()
        };
        assert_eq!(cell("url"), Cell::Text("http://example.com".into()));
        assert_eq!(cell("blacklisted"), Cell::Bool(true));
        assert_eq!(cell("ssl_valid"), Cell::Empty);
        assert_eq!(cell("domain_age_days"), Cell::Number(12.0));
        assert_eq!(cell("forms_found"), Cell::Number(3.0));
        assert_eq!(cell("id"), Cell::Empty);
        assert_eq!(cell("redirects"), Cell::Text("[]".into()));
    }

    #[test]
    fn test_huge_integer_stays_exact_text() {
        let record = AnalysisRecord {
            id: Some(i64::MAX),
            ..Default::default()
        };
        let layout = ExportLayout::for_records(std::slice::from_ref(&record));
        assert_eq!(
            layout.cells(&record).get(FIELDS.len() - 2),
            Some(&Cell::Text(i64::MAX.to_string()))
        );
        assert_eq!(
            layout.row(&record)[FIELDS.len() - 2],
            "9223372036854775807"
        );
    }

    #[test]
    fn test_extra_cells_keep_json_types_apart() {
        let records = vec![
            with_extra(&[("flag", json!(true))]),
            with_extra(&[("flag", json!("true"))]),
            with_extra(&[("flag", json!(null))]),
            with_extra(&[]),
        ];
        let layout = ExportLayout::for_records(&records);
        let cells: Vec<String> = records
            .iter()
            .map(|r| layout.row(r).last().cloned().unwrap_or_default())
            .collect();
        assert_eq!(cells, vec!["true", r#""true""#, "null", ""]);
    }
}
