//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON, on stderr)
//! - HTTP client for the analysis service

mod client;
mod logger;

// Re-export public API
pub use client::init_http_client;
pub use logger::{init_logger_with, json_log_line};
