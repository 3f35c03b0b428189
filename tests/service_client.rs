//! Integration tests for the analysis service client
//!
//! These run against a wiremock server standing in for the service and cover:
//! - Request shape for analyze and history
//! - Status, transport and decode failures
//! - Lenient vs strict schema handling

mod helpers;

use phishing_report::{AnalysisClient, Config, HistoryQuery, ServiceError, Verdict};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{analyze_payload, history_entry};

fn client_for(server: &MockServer, strict_schema: bool) -> AnalysisClient {
    let config = Config {
        service_url: server.uri(),
        timeout_seconds: 5,
        strict_schema,
        ..Default::default()
    };
    AnalysisClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn analyze_posts_normalized_url_and_decodes_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_url"))
        .and(body_json(json!({"url": "http://paypa1-secure.example.net/login"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(analyze_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, false);
    let record = client
        .analyze("  paypa1-secure.example.net/login ")
        .await
        .expect("analyze should succeed");

    assert_eq!(record.url, "http://paypa1-secure.example.net/login");
    assert_eq!(record.id, None);
    assert_eq!(record.ssl_valid, None);
    assert_eq!(phishing_report::classify(&record), Verdict::Malicious);
    assert_eq!(
        phishing_report::resolve_ml_verdict(&record.ml_scores),
        phishing_report::MlVerdict::Phishing
    );
}

#[tokio::test]
async fn analyze_maps_server_error_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check_url"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server, false)
        .analyze("example.com")
        .await
        .expect_err("500 should fail");
    assert!(matches!(err, ServiceError::Status { status: 500, .. }));
    assert_eq!(err.user_message(), "Error 500");
}

#[tokio::test]
async fn analyze_rejects_invalid_input_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(analyze_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server, false)
        .analyze("")
        .await
        .expect_err("empty input should fail");
    assert!(matches!(err, ServiceError::InvalidUrl(_)));
}

#[tokio::test]
async fn unreachable_service_is_reported() {
    // Bind then release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("ephemeral port")
        .port();

    let config = Config {
        service_url: format!("http://127.0.0.1:{port}"),
        timeout_seconds: 2,
        ..Default::default()
    };
    let client = AnalysisClient::new(&config).expect("client should build");
    let err = client
        .list_history(HistoryQuery::default())
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, ServiceError::Unreachable { .. }));
    assert!(err.user_message().contains("Could not reach"));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, false)
        .list_history(HistoryQuery::default())
        .await
        .expect_err("HTML is not a history");
    assert!(matches!(err, ServiceError::Decode { .. }));
}

#[tokio::test]
async fn list_history_sends_paging_and_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .and(query_param("skip", "10"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            history_entry(12, "http://newer.example", true, "2024-03-02T10:00:00"),
            history_entry(11, "http://older.example", false, "2024-03-01T10:00:00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server, false)
        .list_history(HistoryQuery { skip: 10, limit: 2 })
        .await
        .expect("history should load");

    let ids: Vec<Option<i64>> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(12), Some(11)]);
    assert!(records.iter().all(|r| r.ml_scores.is_empty()));
}

#[tokio::test]
async fn empty_history_is_fine() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let records = client_for(&server, true)
        .list_history(HistoryQuery::default())
        .await
        .expect("empty history should load");
    assert!(records.is_empty());
}

#[tokio::test]
async fn schema_violations_warn_by_default_and_fail_when_strict() {
    let server = MockServer::start().await;
    let duplicate = json!([
        history_entry(1, "http://a.example", false, "2024-03-01T10:00:00"),
        history_entry(1, "http://b.example", false, "2024-03-01T11:00:00"),
    ]);
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(duplicate))
        .mount(&server)
        .await;

    let lenient = client_for(&server, false)
        .list_history(HistoryQuery::default())
        .await
        .expect("lenient client keeps the records");
    assert_eq!(lenient.len(), 2);

    let err = client_for(&server, true)
        .list_history(HistoryQuery::default())
        .await
        .expect_err("strict client rejects duplicate ids");
    match err {
        ServiceError::Schema { violations, .. } => assert_eq!(violations.len(), 1),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn service_url_with_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        service_url: format!("{}/api", server.uri()),
        ..Default::default()
    };
    let client = AnalysisClient::new(&config).expect("client should build");
    client
        .list_history(HistoryQuery::default())
        .await
        .expect("prefixed path should be used");
}
