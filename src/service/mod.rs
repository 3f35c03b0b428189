//! Access to the external analysis service.
//!
//! The service does the evidence gathering (blacklists, WHOIS, DNS, TLS,
//! page scraping, ML scoring). This crate only submits URLs and reads back
//! records.

mod client;
mod submission;

pub use client::{AnalysisClient, HistoryQuery};
pub use submission::validate_submission;
