//! Analysis record schema.
//!
//! This module provides:
//! - The [`AnalysisRecord`] data contract shared with the analysis service
//! - The versioned field-descriptor table used by display, risk and export
//! - Schema validation for received records

mod fields;
mod types;
mod validation;


pub use fields::{Field, FieldDescriptor, FieldValue, FIELDS, LIST_SEPARATOR, SCHEMA_VERSION};
pub use types::{AnalysisRecord, DomainSimilarity, MlScore};
pub use validation::{parse_instant, validate_history, validate_record};
