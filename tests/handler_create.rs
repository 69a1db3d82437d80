mod common;

use axum::body::Bytes;
use serde_json::Value;
use short_url_service::domain::entities::LongUrlShortUrl;
use std::sync::Arc;

#[tokio::test]
async fn test_create_raw_body_success() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/").text("https://www.bbc.co.uk/news").await;

    response.assert_status_ok();

    let created = response.json::<LongUrlShortUrl>();
    assert_eq!(created.long_url, "https://www.bbc.co.uk/news");
    assert_eq!(created.short_url.len(), 7);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_create_json_string_body() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/").json(&"https://example.com/path?q=1").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["longUrl"], "https://example.com/path?q=1");
    assert!(json["shortUrl"].is_string());
}

#[tokio::test]
async fn test_create_then_list_and_redirect() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let created = server
        .post("/")
        .text("https://www.bbc.co.uk/news")
        .await
        .json::<LongUrlShortUrl>();

    let listed = server.get("/").await.json::<Vec<LongUrlShortUrl>>();
    assert_eq!(listed, vec![created.clone()]);

    let response = server.get(&format!("/{}", created.short_url)).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.bbc.co.uk/news");
}

#[tokio::test]
async fn test_create_deduplication() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let first = server
        .post("/")
        .text("https://dedup.com")
        .await
        .json::<LongUrlShortUrl>();

    let second = server
        .post("/")
        .json(&"https://dedup.com")
        .await
        .json::<LongUrlShortUrl>();

    assert_eq!(first.short_url, second.short_url);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_create_distinct_urls_get_distinct_codes() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let a = server
        .post("/")
        .text("https://example.com/1")
        .await
        .json::<LongUrlShortUrl>();
    let b = server
        .post("/")
        .text("https://example.com/2")
        .await
        .json::<LongUrlShortUrl>();

    assert_ne!(a.short_url, b.short_url);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/").text("hdshjdshjdfhsfg").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Invalid url entered.");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_non_utf8_body() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/")
        .bytes(Bytes::from_static(&[0xff, 0xfe, b'h']))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Invalid url entered.");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_rejects_embedded_newline() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/").text("https://exa\nmple.com/news").await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["message"], "Invalid url entered.");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_empty_body() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/").text("").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_alias_unavailable() {
    let state = common::create_state_with(Arc::new(common::SaturatedRepository));
    let server = common::create_test_server(state);

    let response = server.post("/").text("https://example.com").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<Value>();
    assert_eq!(json["status"], 503);
    assert_eq!(
        json["message"],
        "Alias not available. Please try again later."
    );
}

#[tokio::test]
async fn test_create_store_failure() {
    let state = common::create_state_with(Arc::new(common::UnreachableRepository));
    let server = common::create_test_server(state);

    let response = server.post("/").text("https://example.com").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<Value>();
    assert_eq!(json["status"], 500);
    assert_eq!(
        json["message"],
        "Internal Server Error! connection refused"
    );
}
