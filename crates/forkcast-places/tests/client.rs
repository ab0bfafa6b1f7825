//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use forkcast_core::Coordinate;
use forkcast_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "forkcast-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn geocode_returns_first_match() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                "geometry": { "location": { "lat": 37.422, "lng": -122.084 } }
            },
            {
                "formatted_address": "Somewhere Else",
                "geometry": { "location": { "lat": 40.0, "lng": -70.0 } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("address", "1600 Amphitheatre Parkway"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let anchor = client
        .geocode("1600 Amphitheatre Parkway")
        .await
        .expect("should parse geocode response");

    assert_eq!(anchor, Some(Coordinate::new(37.422, -122.084)));
}

#[tokio::test]
async fn geocode_zero_results_returns_none() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let anchor = client
        .geocode("nowhere at all")
        .await
        .expect("zero results should not be an error");

    assert_eq!(anchor, None);
}

#[tokio::test]
async fn geocode_denied_request_returns_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("1600 Amphitheatre Parkway").await;

    assert!(
        matches!(result, Err(PlacesError::ApiError(ref msg)) if msg.contains("API key is invalid")),
        "expected ApiError, got: {result:?}"
    );
}

#[tokio::test]
async fn search_nearby_maps_wire_fields_onto_candidates() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "place-1",
                "name": "Trattoria Uno",
                "vicinity": "100 Castro St",
                "geometry": { "location": { "lat": 37.39, "lng": -122.08 } }
            },
            {
                "place_id": "place-2",
                "name": "Pasta Due",
                "geometry": { "location": { "lat": 37.40, "lng": -122.09 } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("location", "37.422,-122.084"))
        .and(query_param("radius", "304.8"))
        .and(query_param("type", "restaurant"))
        .and(query_param("keyword", "Italian"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(Coordinate::new(37.422, -122.084), 304.8, "Italian")
        .await
        .expect("should parse nearby search response");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].external_id, "place-1");
    assert_eq!(candidates[0].name, "Trattoria Uno");
    assert_eq!(candidates[0].vicinity, "100 Castro St");
    assert_eq!(candidates[0].location, Coordinate::new(37.39, -122.08));
    // Listings without a vicinity come through with an empty string.
    assert_eq!(candidates[1].vicinity, "");
}

#[tokio::test]
async fn search_nearby_zero_results_returns_empty_vec() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let candidates = client
        .search_nearby(Coordinate::new(37.422, -122.084), 500.0, "Thai")
        .await
        .expect("zero results should not be an error");

    assert!(candidates.is_empty());
}

#[tokio::test]
async fn server_error_status_returns_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .search_nearby(Coordinate::new(37.422, -122.084), 500.0, "Thai")
        .await;

    assert!(
        matches!(result, Err(PlacesError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_body_returns_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("1600 Amphitheatre Parkway").await;

    assert!(
        matches!(result, Err(PlacesError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}
