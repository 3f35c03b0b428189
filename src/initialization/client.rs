//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Builds the HTTP client used to talk to the analysis service.
///
/// Timeout and User-Agent come from `config`. Redirects use reqwest's default
/// policy.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or the
/// User-Agent value is rejected by reqwest.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
