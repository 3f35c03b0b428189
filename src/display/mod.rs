//! Presentation helpers: the detail view of one record and the history table.
//!
//! Nothing here decides risk; it only arranges what [`crate::classify`]
//! already decided.

mod time;
mod views;

pub use time::format_timestamp;
pub use views::{
    describe_record, display_value, history_rows, FieldView, HistoryRow, TriState, ABSENT,
};
