//! COD client tests using wiremock.
//!
//! These tests verify the network-backed repository by mocking the COD REST API.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cif_mcp::client::CodClient;
use cif_mcp::config::Config;
use cif_mcp::error::ClientError;
use cif_mcp::models::{CheckResponse, SearchResponse};
use cif_mcp::repository::MaterialRepository;
use cif_mcp::tools::{CheckCifTool, McpTool, SearchCifTool, ToolContext};

fn setup_client(mock_server: &MockServer) -> CodClient {
    CodClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri());
    ToolContext::from_config(&config).unwrap()
}

/// Sample COD result rows.
fn sample_entries() -> serde_json::Value {
    json!([
        {"file": "1550396", "formula": "- Co Li O2 -", "chemname": "Lithium cobalt oxide"},
        {"file": 9_008_460, "formula": "- Fe Li O4 P -", "mineral": "Triphylite"},
        {"file": "4002260", "formula": "- Mn0.67 Na Ni0.33 O2 -"}
    ])
}

#[tokio::test]
async fn test_search_text_maps_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .and(query_param("text", "lithium"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_entries()))
        .mount(&mock_server)
        .await;

    let records = setup_client(&mock_server).search_text("lithium").await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].formula, "Co Li O2");
    assert_eq!(records[1].cod_id, "9008460");
    assert_eq!(records[1].display_name, "Triphylite");
    assert_eq!(records[2].display_name, "Mn0.67 Na Ni0.33 O2");
}

#[tokio::test]
async fn test_search_materials_truncates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_entries()))
        .mount(&mock_server)
        .await;

    let records = setup_client(&mock_server).search_materials("oxide", 2).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_responses_are_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_entries()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let first = client.search_text("LiCoO2").await.unwrap();
    let second = client.search_text("LiCoO2").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).search_text("LiCoO2").await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 503, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).search_text("LiCoO2").await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)), "got {err:?}");
}

// =============================================================================
// Tools over the COD backend
// =============================================================================

#[tokio::test]
async fn test_search_tool_over_cod() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .and(query_param("text", "cobalt oxide"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_entries()))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let output = SearchCifTool
        .call(&ctx, json!({"query": "cobalt oxide", "max_results": 1}))
        .await;

    let response: SearchResponse = serde_json::from_str(output.first_text().unwrap()).unwrap();
    assert_eq!(response.total_results, 1);
    assert_eq!(
        response.materials[0].paper_title,
        "Crystal Structure of Lithium cobalt oxide (Co Li O2)"
    );
    assert!(response.materials[0].arxiv_link.contains("terms-0-term=Co+Li+O2"));
}

#[tokio::test]
async fn test_check_tool_falls_back_on_outage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let output = CheckCifTool.call(&ctx, json!({"paper_title": "LiCoO2 thin films"})).await;

    let response: CheckResponse = serde_json::from_str(output.first_text().unwrap()).unwrap();
    assert!(!response.has_cif_files);
}

#[tokio::test]
async fn test_slow_database_times_out_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/result"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_entries())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server)
        .with_lookup_timeout(std::time::Duration::from_millis(100));
    let output = SearchCifTool.call(&ctx, json!({"query": "LiCoO2"})).await;

    let response: SearchResponse = serde_json::from_str(output.first_text().unwrap()).unwrap();
    assert_eq!(response.total_results, 0);
}

#[tokio::test]
async fn test_context_reports_backend() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);
    assert_eq!(ctx.repository.name(), "cod");

    let fixture = ToolContext::new(Arc::new(cif_mcp::FixtureRepository::new()));
    assert_eq!(fixture.repository.name(), "fixture");
}
