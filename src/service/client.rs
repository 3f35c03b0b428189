//! HTTP client for the external analysis service.

use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{Config, ANALYZE_PATH, DEFAULT_HISTORY_LIMIT, HISTORY_PATH};
use crate::error_handling::{InitializationError, SchemaViolation, ServiceError};
use crate::initialization::init_http_client;
use crate::record::{validate_history, validate_record, AnalysisRecord};

use super::submission::validate_submission;

/// Paging parameters for [`AnalysisClient::list_history`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    /// Records to skip (newest first)
    pub skip: u32,
    /// Maximum number of records returned
    pub limit: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

/// Client for the two collaborator operations: `analyze` and `list history`.
///
/// Each call is a single request. There is no retry and no caching; callers
/// await one call before issuing the next.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    base: Url,
    strict_schema: bool,
}

impl AnalysisClient {
    /// Builds a client (and its HTTP connection pool) from `config`.
    ///
    /// # Errors
    ///
    /// Fails if `config.service_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let http = init_http_client(config)?;
        Self::with_http_client(http, config)
    }

    /// Like [`AnalysisClient::new`] but reuses an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, config: &Config) -> Result<Self, InitializationError> {
        let base = parse_base_url(&config.service_url)?;
        Ok(Self {
            http,
            base,
            strict_schema: config.strict_schema,
        })
    }

    /// Base URL requests are resolved against (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Submits `input` for analysis and returns the resulting record.
    ///
    /// The input is normalized with [`validate_submission`] first; the
    /// returned record usually has no `id` or `timestamp`.
    pub async fn analyze(&self, input: &str) -> Result<AnalysisRecord, ServiceError> {
        let url = validate_submission(input)?;
        let endpoint = self.endpoint(ANALYZE_PATH)?;
        info!("Submitting {url} for analysis");

        let response = self
            .http
            .post(endpoint.clone())
            .json(&AnalyzeRequest { url: &url })
            .send()
            .await;
        let record: AnalysisRecord = decode_response(&endpoint, response).await?;

        self.check_schema(&endpoint, validate_record(&record))?;
        Ok(record)
    }

    /// Fetches one page of the analysis history, in the order the service
    /// returns it (newest first).
    pub async fn list_history(
        &self,
        query: HistoryQuery,
    ) -> Result<Vec<AnalysisRecord>, ServiceError> {
        let endpoint = self.endpoint(HISTORY_PATH)?;
        debug!(
            "Fetching history from {endpoint} (skip={}, limit={})",
            query.skip, query.limit
        );

        let response = self.http.get(endpoint.clone()).query(&query).send().await;
        let records: Vec<AnalysisRecord> = decode_response(&endpoint, response).await?;

        self.check_schema(&endpoint, validate_history(&records))?;
        info!("Fetched {} history record(s)", records.len());
        Ok(records)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base
            .join(path)
            .map_err(|e| ServiceError::InvalidUrl(format!("cannot build endpoint {path}: {e}")))
    }

    fn check_schema(
        &self,
        endpoint: &Url,
        violations: Vec<SchemaViolation>,
    ) -> Result<(), ServiceError> {
        if violations.is_empty() {
            return Ok(());
        }
        if self.strict_schema {
            return Err(ServiceError::Schema {
                endpoint: endpoint.to_string(),
                violations,
            });
        }
        warn!(
            "Response from {endpoint} has {} schema problem(s)",
            violations.len()
        );
        for violation in &violations {
            warn!("  {violation}");
        }
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, InitializationError> {
    let invalid = |reason: String| InitializationError::ServiceUrlError {
        url: raw.to_string(),
        reason,
    };
    let mut base = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", base.scheme())));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

async fn decode_response<T: DeserializeOwned>(
    endpoint: &Url,
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, ServiceError> {
    let unreachable = |source: reqwest::Error| ServiceError::Unreachable {
        endpoint: endpoint.to_string(),
        source,
    };

    let response = response.map_err(unreachable)?;
    let status = response.status();
    if !status.is_success() {
        warn!("{endpoint} answered HTTP {status}");
        return Err(ServiceError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(unreachable)?;
    serde_json::from_str(&body).map_err(|source| {
        debug!("Undecodable body from {endpoint}: {body:.200}");
        ServiceError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
    })
}
