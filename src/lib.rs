//! phishing_report library: risk classification and aggregation for phishing analyses
//!
//! An external analysis service gathers the evidence for a URL (blacklists,
//! WHOIS, DNS, TLS, page content, ML scores) and returns an [`AnalysisRecord`].
//! This library turns those records into:
//! - a malicious/safe [`Verdict`] and per-field risk highlighting
//! - an ML verdict from the service's label probabilities
//! - fleet-wide [`Summary`] statistics and chart series
//! - an XLSX workbook, CSV or JSONL export
//!
//! # Example
//!
//! ```no_run
//! use phishing_report::{aggregate, classify, AnalysisClient, Config, HistoryQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalysisClient::new(&Config::default())?;
//!
//! let record = client.analyze("paypa1-login.example.net").await?;
//! println!("{}", classify(&record).headline());
//!
//! let history = client.list_history(HistoryQuery::default()).await?;
//! let summary = aggregate(&history);
//! println!("{} analyzed, {} blacklisted", summary.total, summary.malicious_count);
//! # Ok(())
//! # }
//! ```
//!
//! Everything except [`AnalysisClient`] is synchronous and pure.

pub mod app;
pub mod classify;
pub mod config;
pub mod display;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod record;
pub mod service;
pub mod statistics;

// Re-export public API
pub use classify::{classify, is_field_risky, resolve_ml_verdict, MlVerdict, Verdict};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError, SchemaViolation, ServiceError};
pub use export::{export_tabular, ExportFormat};
pub use record::{AnalysisRecord, DomainSimilarity, Field, MlScore};
pub use service::{AnalysisClient, HistoryQuery};
pub use statistics::{aggregate, Summary};
