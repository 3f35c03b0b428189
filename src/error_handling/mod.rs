//! Error handling.
//!
//! This module provides the error types for the library's fallible edges:
//! - **Initialization**: logger and HTTP client setup
//! - **Service**: transport, status and decoding failures from the analysis service
//! - **Schema**: invariant violations found in received records
//! - **Export**: CSV/JSONL write failures

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, SchemaViolation, ServiceError};
