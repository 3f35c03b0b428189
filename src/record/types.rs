//! Analysis record types.
//!
//! These mirror the JSON produced by the external analysis service. Field order
//! follows the service's wire order so that serialized records (JSONL export)
//! read the same way the service emits them.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Similarity between the analyzed host and a known brand domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSimilarity {
    /// Brand domain the host resembles (e.g. `paypal.com`)
    pub brand: String,
    /// Lexical edit distance to the brand; smaller is more suspicious
    pub distance: u32,
}

/// One (label, probability) pair from the service's ML classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlScore {
    /// Predicted class label (e.g. `phishing`, `benign`)
    pub label: String,
    /// Probability of the class, expected in `[0, 1]`
    pub probability: f64,
}

/// One completed analysis of a URL, as produced by the external service.
///
/// Records are never mutated by this crate; every view (verdict, summary,
/// export row) is derived from a shared reference.
///
/// Optional fields are `None` when the service could not evaluate them (for
/// example `ssl_valid` when the TLS handshake failed). List fields decode as
/// empty when the service sends `null` or omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The analyzed URL as normalized by the service
    pub url: String,

    // Blacklist
    pub blacklisted: bool,
    #[serde(default)]
    pub blacklist_source: Option<String>,

    // Lexical heuristics
    pub suspicious_numbers: bool,
    pub excessive_subdomains: bool,
    pub special_chars: bool,

    // WHOIS
    #[serde(default)]
    pub domain_creation_date: Option<String>,
    #[serde(default)]
    pub domain_age_days: Option<i64>,

    // DNS
    pub dynamic_dns: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dns_records: Vec<String>,

    // TLS
    #[serde(default)]
    pub ssl_valid: Option<bool>,
    #[serde(default)]
    pub ssl_issuer: Option<String>,
    #[serde(default)]
    pub ssl_expiration_date: Option<String>,
    #[serde(default)]
    pub ssl_domain_match: Option<bool>,

    /// Redirect chain, first hop to last
    #[serde(default, deserialize_with = "null_as_empty")]
    pub redirects: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub similar_domains: Vec<DomainSimilarity>,

    // Page content
    #[serde(default)]
    pub forms_found: u32,
    #[serde(default)]
    pub login_fields_found: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sensitive_fields_found: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suspicious_images: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub ml_scores: Vec<MlScore>,

    /// Service-assigned identifier; absent on a fresh `analyze` response
    #[serde(default)]
    pub id: Option<i64>,
    /// Creation instant (ISO-8601); absent on a fresh `analyze` response
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Top-level fields this schema version does not know about.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
