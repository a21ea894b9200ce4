use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{Extension, Form};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{any, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recify::api::{SearchForm, search};
use recify::config::Config;
use recify::error::SearchError;
use recify::spotify::auth::fetch_token;
use recify::spotify::search::{MAX_ATTEMPTS, search_tracks};

const TEST_TOKEN: &str = "BQC-test-access-token";

// Helper function to create a config pointing at the mock server
fn create_test_config(server: &MockServer) -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        secret_key: "test-secret-key".to_string(),
        token_url: format!("{}/api/token", server.uri()),
        api_url: format!("{}/v1", server.uri()),
        server_address: "127.0.0.1:0".to_string(),
    }
}

fn token_response() -> serde_json::Value {
    json!({
        "access_token": TEST_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    })
}

fn search_response() -> serde_json::Value {
    json!({
        "tracks": {
            "items": [{
                "id": "0DiWol3AO6WpXZgp0goxAV",
                "name": "One More Time",
                "artists": [{ "name": "Daft Punk" }],
                "album": {
                    "name": "Discovery",
                    "images": [{
                        "url": "https://i.scdn.co/image/ab67616d0000b273",
                        "height": 640,
                        "width": 640
                    }]
                },
                "external_urls": {
                    "spotify": "https://open.spotify.com/track/0DiWol3AO6WpXZgp0goxAV"
                }
            }],
            "total": 1
        }
    })
}

#[tokio::test]
async fn test_fetch_token_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client-id"))
        .and(body_string_contains("client_secret=test-client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let token = fetch_token(&config).await.unwrap();

    assert_eq!(token.access_token, TEST_TOKEN);
    assert_eq!(token.expires_in, Some(3600));
}

#[tokio::test]
async fn test_fetch_token_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let err = fetch_token(&config).await.unwrap_err();

    assert!(matches!(err, SearchError::Auth(status) if status == StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_token_failure_blocks_catalog_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    // The catalog endpoint must never be hit when authentication fails
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(0)
        .mount(&server)
        .await;

    let config = Arc::new(create_test_config(&server));
    let form = SearchForm {
        search: Some("daft punk".to_string()),
        category: None,
        language: None,
    };

    let page = search(Extension(config), Form(form)).await.0;

    assert!(page.contains("Error:"));
    assert!(page.contains("failed to obtain access token"));
}

#[tokio::test]
async fn test_empty_form_makes_no_outbound_calls() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = Arc::new(create_test_config(&server));
    let form = SearchForm {
        search: Some("   ".to_string()),
        category: None,
        language: Some(String::new()),
    };

    let page = search(Extension(config), Form(form)).await.0;

    assert!(page.contains("Please enter a search term, category, or language."));
}

#[tokio::test]
async fn test_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "daft punk electronic"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "10"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let tracks = search_tracks(&config, "daft punk electronic", TEST_TOKEN)
        .await
        .unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "One More Time");
    assert_eq!(tracks[0].artists[0].name, "Daft Punk");
    assert_eq!(tracks[0].album.name, "Discovery");
}

#[tokio::test]
async fn test_search_empty_track_list_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "tracks": { "items": [] } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let tracks = search_tracks(&config, "no hits", TEST_TOKEN).await.unwrap();

    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_search_absent_tracks_container_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let tracks = search_tracks(&config, "no hits", TEST_TOKEN).await.unwrap();

    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_search_non_success_status_fails_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let err = search_tracks(&config, "daft punk", TEST_TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Catalog(status) if status == StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn test_search_retries_after_rate_limit_then_succeeds() {
    let server = MockServer::start().await;

    // First two calls are throttled with a one second wait each; mocks are
    // matched in mount order, so the 200 response covers the third call.
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "1"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let started = Instant::now();
    let tracks = search_tracks(&config, "daft punk", TEST_TOKEN).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(tracks.len(), 1);
    // Two waits of one second each before the successful attempt
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(4));
}

#[tokio::test]
async fn test_search_rate_limit_exhausts_all_attempts() {
    let server = MockServer::start().await;

    // Zero second wait keeps the test fast while still exercising the loop
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .expect(u64::from(MAX_ATTEMPTS))
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let err = search_tracks(&config, "daft punk", TEST_TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::RetryExhausted(attempts) if attempts == MAX_ATTEMPTS));
}

#[tokio::test]
async fn test_search_rate_limit_without_header_uses_default_wait() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": { "items": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server);
    let started = Instant::now();
    let tracks = search_tracks(&config, "daft punk", TEST_TOKEN).await.unwrap();

    assert!(tracks.is_empty());
    // Missing Retry-After falls back to one second
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_full_search_flow_renders_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "daft punk french"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = Arc::new(create_test_config(&server));
    let form = SearchForm {
        search: Some("daft punk".to_string()),
        category: None,
        language: Some("french".to_string()),
    };

    let page = search(Extension(config), Form(form)).await.0;

    assert!(page.contains("One More Time"));
    assert!(page.contains("Daft Punk"));
    assert!(!page.contains("Error:"));
}
