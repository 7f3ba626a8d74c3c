// ABOUTME: Integration tests for the HTTP routes through the full middleware stack
// ABOUTME: Exercises cocktail, stats, associates, health, and CORS preflight handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use barkeep_server::server::Server;
use serde_json::Value;
use std::error::Error;
use tower::ServiceExt;

fn sample_app() -> Router {
    Server::new(common::sample_resources()).router()
}

async fn get(
    app: Router,
    uri: &str,
) -> Result<(StatusCode, axum::http::HeaderMap, String), Box<dyn Error>> {
    let request = Request::builder().uri(uri).body(Body::empty())?;
    let response = app.oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, headers, String::from_utf8(body.to_vec())?))
}

#[tokio::test]
async fn test_cocktail_endpoint_serves_json_with_cors() -> Result<(), Box<dyn Error>> {
    let app = sample_app();

    // Retry a few times: a walk seeded on an isolated ingredient is a valid 500
    for _ in 0..10 {
        let (status, headers, body) = get(app.clone(), "/cocktail").await?;
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert!(headers.contains_key("x-request-id"));

        if status == StatusCode::OK {
            assert_eq!(headers.get("content-type").unwrap(), "application/json");
            let json: Value = serde_json::from_str(&body)?;
            assert!(json["name"].is_string());
            assert!(json["ingredients"].as_array().unwrap().len() >= 2);
            return Ok(());
        }
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    panic!("no cocktail served in ten attempts");
}

#[tokio::test]
async fn test_root_path_serves_cocktails_too() -> Result<(), Box<dyn Error>> {
    let (status, headers, _) = get(sample_app(), "/").await?;

    assert!(status == StatusCode::OK || status == StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers.get("access-control-allow-methods").unwrap(), "*");
    Ok(())
}

#[tokio::test]
async fn test_empty_corpus_returns_500_with_message() -> Result<(), Box<dyn Error>> {
    let app = Server::new(common::resources_from_json("[]")).router();

    let (status, headers, body) = get(app, "/cocktail").await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(headers.get("content-type").is_none());
    assert_eq!(headers.get("access-control-allow-headers").unwrap(), "*");
    assert!(body.contains("no ingredients"));
    Ok(())
}

#[tokio::test]
async fn test_stats_endpoint() -> Result<(), Box<dyn Error>> {
    let app = Server::new(common::resources_from_json(common::SMALL_CORPUS)).router();

    let (status, _, body) = get(app, "/stats").await?;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["recipes"], 2);
    assert_eq!(json["identities"], 5);
    assert_eq!(json["edges"], 15);
    Ok(())
}

#[tokio::test]
async fn test_associates_endpoint_weights_shared_partners() -> Result<(), Box<dyn Error>> {
    let app = Server::new(common::resources_from_json(common::SMALL_CORPUS)).router();

    let (status, _, body) = get(app, "/associates/Lime%20juice").await?;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["identity"], "Lime juice");
    let names: Vec<&str> = json["associates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Gin", "Soda water", "Ice", "Vodka", "Simple syrup"]
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_associate_is_404() -> Result<(), Box<dyn Error>> {
    let (status, headers, body) = get(sample_app(), "/associates/Unobtainium").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(
        json["error"]["request_id"],
        headers.get("x-request-id").unwrap().to_str()?
    );
    Ok(())
}

#[tokio::test]
async fn test_not_found_body_carries_incoming_request_id() -> Result<(), Box<dyn Error>> {
    let request = Request::builder()
        .uri("/associates/Unobtainium")
        .header("x-request-id", "order-99")
        .body(Body::empty())?;

    let response = sample_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let json: Value = serde_json::from_slice(&body)?;
    assert_eq!(json["error"]["request_id"], "order-99");
    Ok(())
}

#[tokio::test]
async fn test_health_and_ready() -> Result<(), Box<dyn Error>> {
    let app = sample_app();

    let (status, _, body) = get(app.clone(), "/health").await?;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["status"], "healthy");

    let (status, _, body) = get(app, "/ready").await?;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body)?;
    assert_eq!(json["status"], "ready");
    assert!(json["recipes"].as_u64().unwrap() >= 10);
    assert!(json["identities"].as_u64().unwrap() > 0);
    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_is_answered() -> Result<(), Box<dyn Error>> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/cocktail")
        .header("origin", "https://example.com")
        .header("access-control-request-method", "GET")
        .header("access-control-request-headers", "x-custom")
        .body(Body::empty())?;

    let response = sample_app().oneshot(request).await?;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert!(response
        .headers()
        .contains_key("access-control-allow-methods"));
    Ok(())
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() -> Result<(), Box<dyn Error>> {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "order-42")
        .body(Body::empty())?;

    let response = sample_app().oneshot(request).await?;

    assert_eq!(response.headers().get("x-request-id").unwrap(), "order-42");
    Ok(())
}
