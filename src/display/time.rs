//! Timestamp formatting for display.

use chrono::{FixedOffset, Offset, Utc};

use crate::config::DISPLAY_TIMESTAMP_FORMAT;
use crate::record::parse_instant;

/// Formats an ISO-8601 instant as `dd/MM/yyyy HH:mm` in a fixed UTC offset.
///
/// Input that does not parse is returned unchanged. An offset outside
/// ±24h falls back to UTC.
pub fn format_timestamp(ts: &str, utc_offset_minutes: i32) -> String {
    let Some(instant) = parse_instant(ts) else {
        return ts.to_string();
    };
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    instant
        .with_timezone(&offset)
        .format(DISPLAY_TIMESTAMP_FORMAT)
        .to_string()
}
