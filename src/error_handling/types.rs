//! Error type definitions.
//!
//! This module defines the error types returned by the library's fallible
//! edges: logger setup, the service client and export writers. The pure
//! classification and aggregation functions have no error channel.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured service URL is not an absolute http(s) URL.
    #[error("Invalid service URL {url:?}: {reason}")]
    ServiceUrlError { url: String, reason: String },
}

/// A record (or collection) that breaks a schema invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaViolation {
    /// An ML score outside `[0, 1]` (NaN included).
    #[error("ml_scores[{index}] ({label}) has probability {probability} outside [0, 1]")]
    ProbabilityOutOfRange {
        index: usize,
        label: String,
        probability: f64,
    },

    /// `blacklist_source` set on a record that is not blacklisted.
    #[error("blacklist_source {blacklist_source:?} is set but the URL is not blacklisted")]
    SourceWithoutBlacklist { blacklist_source: String },

    /// Negative domain age.
    #[error("domain_age_days is negative ({0})")]
    NegativeDomainAge(i64),

    /// A date field that does not parse as ISO-8601.
    #[error("{field} is not an ISO-8601 date: {value:?}")]
    UnparsableDate { field: &'static str, value: String },

    /// The same `id` twice in one history.
    #[error("id {0} appears more than once in the history")]
    DuplicateId(i64),
}

/// Failures talking to the external analysis service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The submitted URL was rejected before any request was made.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, timeout or body transfer failure.
    #[error("Analysis service unreachable at {endpoint}: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: ReqwestError,
    },

    /// The service answered with a non-success status.
    #[error("Analysis service returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The response body was not the expected JSON.
    #[error("Unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The payload decoded but violates the schema (strict mode only).
    #[error("Response from {endpoint} violates the record schema ({} problem(s))", .violations.len())]
    Schema {
        endpoint: String,
        violations: Vec<SchemaViolation>,
    },
}

impl ServiceError {
    /// Single human-readable message for the user. Details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::InvalidUrl(reason) => format!("Invalid URL: {reason}"),
            ServiceError::Unreachable { .. } => {
                "Could not reach the analysis service. Check that it is running and try again."
                    .to_string()
            }
            ServiceError::Status { status, .. } => format!("Error {status}"),
            ServiceError::Decode { .. } | ServiceError::Schema { .. } => {
                "The analysis service sent a response that could not be read.".to_string()
            }
        }
    }
}

/// Failures writing an export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
