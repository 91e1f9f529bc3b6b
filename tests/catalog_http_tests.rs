use marquee::catalog::{CatalogError, CatalogSource, HttpCatalog};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const SHOWS_PATH: &str = "/data/shows.json";

async fn mock_catalog(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(SHOWS_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

fn catalog_for(server: &MockServer) -> HttpCatalog {
    HttpCatalog::new(format!("{}{}", server.uri(), SHOWS_PATH))
}

// ============================================================================
// Success Cases
// ============================================================================

#[tokio::test]
async fn test_fetch_returns_shows_sorted_by_date() {
    let mock_server = MockServer::start().await;

    // Served out of order on purpose — the catalog must sort at load time.
    let body = r#"[
        {"venue": "First Avenue", "city": "Minneapolis", "state": "MN",
         "date": "2026-10-20",
         "coordinates": {"lat": 44.9813, "lng": -93.2762}},
        {"venue": "The Roxy", "address": "9009 W Sunset Blvd",
         "city": "West Hollywood", "state": "CA", "date": "2026-09-18",
         "coordinates": {"lat": 34.0906, "lng": -118.3884},
         "ticketUrl": "https://tickets.example/roxy", "soldOut": true}
    ]"#;
    mock_catalog(&mock_server, ResponseTemplate::new(200).set_body_string(body)).await;

    let shows = catalog_for(&mock_server).fetch().await.unwrap();

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].venue, "The Roxy");
    assert_eq!(shows[1].venue, "First Avenue");

    // camelCase payload fields land in the typed struct
    assert!(shows[0].sold_out);
    assert_eq!(
        shows[0].ticket_url.as_deref(),
        Some("https://tickets.example/roxy")
    );
    assert_eq!(shows[0].address.as_deref(), Some("9009 W Sunset Blvd"));
}

#[tokio::test]
async fn test_fetch_keeps_source_order_for_same_day_shows() {
    let mock_server = MockServer::start().await;

    let body = r#"[
        {"venue": "Early slot", "city": "Omaha", "state": "NE", "date": "2026-09-01"},
        {"venue": "Late slot", "city": "Omaha", "state": "NE", "date": "2026-09-01"}
    ]"#;
    mock_catalog(&mock_server, ResponseTemplate::new(200).set_body_string(body)).await;

    let shows = catalog_for(&mock_server).fetch().await.unwrap();
    assert_eq!(shows[0].venue, "Early slot");
    assert_eq!(shows[1].venue, "Late slot");
}

#[tokio::test]
async fn test_fetch_empty_array_is_success_not_error() {
    let mock_server = MockServer::start().await;
    mock_catalog(&mock_server, ResponseTemplate::new(200).set_body_string("[]")).await;

    let shows = catalog_for(&mock_server).fetch().await.unwrap();
    assert!(shows.is_empty());
}

// ============================================================================
// Failure Cases
// ============================================================================

#[tokio::test]
async fn test_fetch_missing_document_is_not_found() {
    let mock_server = MockServer::start().await;
    mock_catalog(&mock_server, ResponseTemplate::new(404)).await;

    let result = catalog_for(&mock_server).fetch().await;
    assert!(matches!(result, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn test_fetch_server_error_carries_the_status() {
    let mock_server = MockServer::start().await;
    mock_catalog(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("boom"),
    )
    .await;

    let result = catalog_for(&mock_server).fetch().await;
    match result {
        Err(CatalogError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_malformed_payload_is_a_parse_error() {
    let mock_server = MockServer::start().await;
    mock_catalog(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("{\"shows\": \"nope\"}"),
    )
    .await;

    let result = catalog_for(&mock_server).fetch().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_rejects_impossible_coordinates() {
    let mock_server = MockServer::start().await;

    let body = r#"[
        {"venue": "Nowhere", "city": "X", "state": "Y", "date": "2026-09-01",
         "coordinates": {"lat": 120.5, "lng": 10.0}}
    ]"#;
    mock_catalog(&mock_server, ResponseTemplate::new(200).set_body_string(body)).await;

    let result = catalog_for(&mock_server).fetch().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_unreachable_server_is_a_network_error() {
    // Port 1 on localhost: nothing is listening.
    let source = HttpCatalog::new("http://127.0.0.1:1/data/shows.json".to_string());
    let result = source.fetch().await;
    assert!(matches!(result, Err(CatalogError::Network(_))));
}
