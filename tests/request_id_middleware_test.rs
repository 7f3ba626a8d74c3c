// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for request ID middleware
//!
//! Tests the request ID middleware functionality including:
//! - UUID generation for each request
//! - Reuse of a caller-supplied request ID
//! - Request ID availability in handlers via extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use axum::{
    body::{to_bytes, Body},
    http::{Request as HttpRequest, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use barkeep_server::middleware::request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
use std::collections::HashSet;
use std::error::Error;
use tower::ServiceExt;
use uuid::Uuid;

async fn test_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!("Request ID: {}", request_id.as_str())
}

fn app() -> Router {
    Router::new()
        .route("/", get(test_handler))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn test_request_id_middleware_generates_id() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let header_value = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("Request ID header not present");
    assert!(
        Uuid::parse_str(header_value.to_str()?).is_ok(),
        "Request ID is not a valid UUID"
    );

    Ok(())
}

#[tokio::test]
async fn test_request_id_available_in_handler() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let header = response.headers().get(REQUEST_ID_HEADER).cloned().unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;

    assert_eq!(body_str, format!("Request ID: {}", header.to_str()?));

    Ok(())
}

#[tokio::test]
async fn test_caller_request_id_is_reused() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "trace-me-123")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "trace-me-123"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(body, "Request ID: trace-me-123");

    Ok(())
}

#[tokio::test]
async fn test_blank_request_id_is_replaced() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "   ")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let value = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str()?;
    assert!(Uuid::parse_str(value).is_ok());

    Ok(())
}

#[tokio::test]
async fn test_request_ids_are_unique() -> Result<(), Box<dyn Error>> {
    let mut ids = HashSet::new();

    for _ in 0..5 {
        let request = HttpRequest::builder().uri("/").body(Body::empty())?;
        let response = app().oneshot(request).await?;
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str()?.to_owned();
        ids.insert(id);
    }

    assert_eq!(ids.len(), 5);
    Ok(())
}
