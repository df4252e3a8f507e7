//! `search_cif` behaviour against the built-in tables.

use serde_json::{Value, json};

use cif_mcp::models::SearchResponse;
use cif_mcp::tools::{McpTool, SearchCifTool, ToolContext};

/// Call the tool and parse the single text block.
async fn call_search(args: Value) -> SearchResponse {
    let output = SearchCifTool.call(&ToolContext::fixture(), args).await;
    assert_eq!(output.content.len(), 1);
    serde_json::from_str(output.first_text().unwrap()).expect("search payload is JSON")
}

// =============================================================================
// Matching
// =============================================================================

#[tokio::test]
async fn test_search_licoo2() {
    let response = call_search(json!({"query": "LiCoO2", "max_results": 5})).await;

    assert!(response.total_results >= 1);
    assert!(response.materials.iter().any(|m| {
        (m.paper_title.ends_with("(LiCoO2)") || m.paper_title.ends_with("(LiCoO)"))
            && m.cif_link.ends_with("/1550396.cif")
    }));
}

#[tokio::test]
async fn test_search_lifepo4() {
    let response = call_search(json!({"query": "LiFePO4", "max_results": 3})).await;

    assert_eq!(response.total_results, 1);
    let hit = &response.materials[0];
    assert_eq!(hit.paper_title, "Crystal Structure of Lithium Iron Phosphate (LiFePO4)");
    assert_eq!(
        hit.arxiv_link,
        "https://arxiv.org/search/advanced?advanced=1&terms-0-term=LiFePO4\
         &terms-0-operator=AND&terms-0-field=title"
    );
    assert_eq!(hit.cif_link, "http://www.crystallography.net/cod/1101111.cif");
}

#[tokio::test]
async fn test_search_unmatched_query() {
    let response = call_search(json!({"query": "xenon"})).await;

    assert_eq!(response.total_results, 0);
    assert!(response.materials.is_empty());
}

#[tokio::test]
async fn test_search_matches_display_name_inside_query() {
    let response =
        call_search(json!({"query": "doping studies of lithium manganese oxide spinels"})).await;

    assert_eq!(response.total_results, 1);
    assert!(response.materials[0].paper_title.contains("(LiMn2O4)"));
}

// =============================================================================
// Result limits
// =============================================================================

#[tokio::test]
async fn test_search_max_results_limit() {
    let response = call_search(json!({"query": "lithium", "max_results": 2})).await;

    assert_eq!(response.total_results, 2);
    assert_eq!(response.materials.len(), 2);
}

#[tokio::test]
async fn test_search_default_max_results_is_five() {
    let omitted = call_search(json!({"query": "lithium"})).await;
    let explicit = call_search(json!({"query": "lithium", "max_results": 5})).await;

    assert_eq!(omitted.total_results, 5);
    assert_eq!(omitted, explicit);
}

#[tokio::test]
async fn test_search_keeps_table_order_under_cap() {
    let response = call_search(json!({"query": "lithium", "max_results": 3})).await;

    let titles: Vec<_> = response.materials.iter().map(|m| m.paper_title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Crystal Structure of Lithium Cobalt Oxide (LiCoO2)",
            "Crystal Structure of Lithium Iron Phosphate (LiFePO4)",
            "Crystal Structure of Lithium Nickel Oxide (LiNiO2)",
        ]
    );
}

#[tokio::test]
async fn test_search_max_results_above_range_is_clamped() {
    let response = call_search(json!({"query": "o", "max_results": 100})).await;

    // Every compound contains an "o"; there are only seven of them
    assert_eq!(response.total_results, 7);
    assert!(response.total_results <= 20);
}

#[tokio::test]
async fn test_search_max_results_as_string() {
    let response = call_search(json!({"query": "LiCoO2", "max_results": "3"})).await;

    assert_eq!(response.total_results, 2);
    assert!(response.materials.iter().all(|m| m.cif_link.ends_with("/1550396.cif")));
}

#[tokio::test]
async fn test_search_max_results_as_float() {
    let response = call_search(json!({"query": "LiCoO2", "max_results": 3.0})).await;
    assert_eq!(response.total_results, 2);

    let capped = call_search(json!({"query": "lithium", "max_results": "2"})).await;
    assert_eq!(capped.total_results, 2);
}

// =============================================================================
// Output format
// =============================================================================

#[tokio::test]
async fn test_search_output_is_pretty_printed() {
    let output = SearchCifTool.call(&ToolContext::fixture(), json!({"query": "LiNiO2"})).await;
    let text = output.first_text().unwrap();

    assert!(text.starts_with("{\n  \"total_results\": 1,\n  \"materials\": ["));
}

#[tokio::test]
async fn test_search_is_idempotent() {
    let ctx = ToolContext::fixture();
    let args = json!({"query": "lithium battery", "max_results": 4});

    let first = SearchCifTool.call(&ctx, args.clone()).await;
    let second = SearchCifTool.call(&ctx, args).await;

    assert_eq!(first.first_text(), second.first_text());
}
