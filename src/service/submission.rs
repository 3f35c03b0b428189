//! URL submission checks.
//!
//! Mirrors what the analysis service does with its input (trim, default
//! `http://` scheme) so obviously bad submissions fail before a request is made.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ServiceError;

/// Validates and normalizes a URL typed by the user.
///
/// Trims whitespace and adds `http://` when no http(s) scheme is present
/// (case-insensitive). The result must parse as an http or https URL with a
/// host and must not exceed [`MAX_URL_LENGTH`].
///
/// # Errors
///
/// Returns `ServiceError::InvalidUrl` with the reason.
pub fn validate_submission(input: &str) -> Result<String, ServiceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidUrl("enter a URL to analyze".into()));
    }

    let lower = trimmed.to_ascii_lowercase();
    let normalized = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    // Checked after normalization since the prefix can push it over
    if normalized.len() > MAX_URL_LENGTH {
        return Err(ServiceError::InvalidUrl(format!(
            "URL is longer than {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = url::Url::parse(&normalized)
        .map_err(|e| ServiceError::InvalidUrl(format!("{trimmed:?} is not a valid URL ({e})")))?;
    match (parsed.scheme(), parsed.host_str()) {
        ("http" | "https", Some(host)) if !host.is_empty() => Ok(normalized),
        _ => Err(ServiceError::InvalidUrl(format!(
            "{trimmed:?} is not a valid web address"
        ))),
    }
}
