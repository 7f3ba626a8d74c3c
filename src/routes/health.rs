// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness reports the process is up; readiness reports the loaded corpus size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use barkeep_core::constants::service_names;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::HEALTH,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Ready once the corpus is resident, which is true for any constructed resources
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "recipes": resources.corpus.len(),
            "identities": resources.index.len(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
