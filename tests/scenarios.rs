//! End-to-end checks from service JSON to verdicts, summaries and views.

mod helpers;

use phishing_report::classify::{is_key_risky, triggered_indicators};
use phishing_report::display::{describe_record, history_rows, TriState};
use phishing_report::record::{validate_record, FieldValue};
use phishing_report::{
    aggregate, classify, is_field_risky, resolve_ml_verdict, AnalysisRecord, Field, MlVerdict,
    Verdict,
};
use serde_json::json;

use helpers::{analyze_payload, history_entry};

fn decode(value: serde_json::Value) -> AnalysisRecord {
    serde_json::from_value(value).expect("record should decode")
}

#[test]
fn subdomains_alone_make_a_record_malicious() {
    let record = decode(json!({
        "url": "http://a.b.c.example.net",
        "blacklisted": false,
        "suspicious_numbers": false,
        "excessive_subdomains": true,
        "special_chars": false,
        "dynamic_dns": false,
        "domain_age_days": 10,
        "ssl_valid": false
    }));

    assert_eq!(classify(&record), Verdict::Malicious);
    assert_eq!(triggered_indicators(&record), vec![Field::ExcessiveSubdomains]);
    assert!(is_field_risky(Field::DomainAgeDays, &FieldValue::Integer(Some(10))));
    assert!(is_field_risky(Field::SslValid, &FieldValue::OptionalFlag(Some(false))));
    assert!(is_key_risky("domain_age_days", &json!(10)));
    assert!(is_key_risky("ssl_valid", &json!(false)));
    assert!(!is_key_risky("ssl_valid", &json!(null)));
}

#[test]
fn one_blacklisted_one_clean() {
    let records: Vec<AnalysisRecord> = serde_json::from_value(json!([
        history_entry(2, "http://bad.example", true, "2024-03-02T10:00:00"),
        history_entry(1, "http://good.example", false, "2024-03-01T10:00:00"),
    ]))
    .expect("history should decode");

    let summary = aggregate(&records);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.malicious_count, 1);
    assert_eq!(summary.safe_count, 1);

    let pie = serde_json::to_value(&summary.pie).expect("pie serializes");
    assert_eq!(
        pie,
        json!([{"name": "Safe", "value": 1}, {"name": "Blacklisted", "value": 1}])
    );
}

#[test]
fn summary_json_uses_dashboard_keys() {
    let summary = aggregate(&[]);
    let value = serde_json::to_value(&summary).expect("summary serializes");
    assert_eq!(value["total"], 0);
    assert_eq!(value["maliciousCount"], 0);
    assert_eq!(value["safeCount"], 0);
    let counts: Vec<u64> = value["perIndicator"]
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["count"].as_u64().expect("count"))
        .collect();
    assert_eq!(counts, vec![0, 0, 0, 0]);
}

#[test]
fn analyze_payload_end_to_end() {
    let record = decode(analyze_payload());
    assert!(validate_record(&record).is_empty());
    assert_eq!(classify(&record), Verdict::Malicious);
    assert_eq!(resolve_ml_verdict(&record.ml_scores), MlVerdict::Phishing);

    let risky: Vec<String> = describe_record(&record)
        .into_iter()
        .filter(|v| v.risky)
        .map(|v| v.label)
        .collect();
    assert_eq!(
        risky,
        vec![
            "Blacklisted",
            "Suspicious Numbers",
            "Domain Age Days",
            "Similar Domains",
            "Forms Found",
            "Login Fields Found",
        ]
    );
}

#[test]
fn unknown_tls_renders_unknown_in_history() {
    let record = decode(analyze_payload());
    let rows = history_rows(std::slice::from_ref(&record), -180);
    assert_eq!(rows[0].ssl_valid, TriState::Unknown);
    assert_eq!(rows[0].date, "-");
}

#[test]
fn lexical_flags_do_not_move_the_blacklist_tally() {
    let mut record = decode(history_entry(1, "http://x.example", false, "2024-03-01T10:00:00"));
    record.special_chars = true;

    assert_eq!(classify(&record), Verdict::Malicious);
    let summary = aggregate(&[record]);
    assert_eq!(summary.malicious_count, 0);
    assert_eq!(summary.safe_count, 1);
    assert_eq!(summary.indicator_count(Field::SpecialChars), Some(1));
}
