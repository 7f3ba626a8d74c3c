// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Allows any origin, method, and header so browsers can call the cocktail endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tower_http::cors::{Any, CorsLayer};

/// Configure CORS settings for the cocktail server
///
/// The cocktail endpoint is public and read-only, so every origin, method, and
/// request header is allowed. Preflight `OPTIONS` requests are answered by the
/// layer itself.
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
