//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A full `/check_url` response as the service sends it.
pub fn analyze_payload() -> Value {
    json!({
        "url": "http://paypa1-secure.example.net/login",
        "blacklisted": true,
        "blacklist_source": "OpenPhish",
        "suspicious_numbers": true,
        "excessive_subdomains": false,
        "special_chars": false,
        "domain_creation_date": "2024-02-25T00:00:00",
        "domain_age_days": 5,
        "dynamic_dns": false,
        "dns_records": ["A 203.0.113.10"],
        "ssl_valid": null,
        "ssl_issuer": null,
        "ssl_expiration_date": null,
        "ssl_domain_match": null,
        "redirects": [],
        "similar_domains": [{"brand": "paypal", "distance": 1}],
        "forms_found": 1,
        "login_fields_found": true,
        "sensitive_fields_found": ["password"],
        "suspicious_images": [],
        "ml_scores": [
            {"label": "phishing", "probability": 0.91},
            {"label": "benign", "probability": 0.09}
        ]
    })
}

/// One persisted history entry; the service omits `ml_scores` here.
pub fn history_entry(id: i64, url: &str, blacklisted: bool, timestamp: &str) -> Value {
    json!({
        "id": id,
        "url": url,
        "timestamp": timestamp,
        "blacklisted": blacklisted,
        "blacklist_source": if blacklisted { Some("Local") } else { None },
        "suspicious_numbers": false,
        "excessive_subdomains": false,
        "special_chars": false,
        "domain_creation_date": null,
        "domain_age_days": null,
        "dynamic_dns": false,
        "dns_records": [],
        "ssl_valid": true,
        "ssl_issuer": "R3",
        "ssl_expiration_date": "2025-01-01T00:00:00",
        "ssl_domain_match": true,
        "redirects": [],
        "similar_domains": [],
        "forms_found": 0,
        "login_fields_found": false,
        "sensitive_fields_found": [],
        "suspicious_images": []
    })
}
