// ABOUTME: HTTP middleware for the cocktail server
// ABOUTME: Permissive CORS and request ID correlation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
