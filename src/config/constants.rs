//! Configuration constants.
//!
//! Defaults for the service client and the display layer, plus the fixed
//! thresholds used by the risk rules.

/// Base URL of the analysis service when none is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Path of the `analyze` operation on the service.
pub const ANALYZE_PATH: &str = "check_url";

/// Path of the `list history` operation on the service.
pub const HISTORY_PATH: &str = "history";

/// Per-request timeout in seconds.
/// Analysis runs WHOIS, DNS, TLS and page fetches server-side, so a single
/// request can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default page size for history requests (matches the service's own default).
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;

/// User-Agent sent to the analysis service.
pub const DEFAULT_USER_AGENT: &str = concat!("phishing_report/", env!("CARGO_PKG_VERSION"));

/// Maximum accepted length of a submitted URL.
pub const MAX_URL_LENGTH: usize = 2048;

/// Domains younger than this many days are highlighted as risky.
pub const YOUNG_DOMAIN_DAYS: i64 = 30;

/// Offset used when formatting timestamps for display (UTC-03:00).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -180;

/// Display format for timestamps (`dd/MM/yyyy HH:mm`).
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";
