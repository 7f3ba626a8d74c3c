// ABOUTME: Cocktail generation and association index inspection routes
// ABOUTME: Serves one freshly invented cocktail per request through the invocation boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::handler::{invoke, InvocationResponse};
use crate::middleware::RequestId;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    Extension,
    routing::get,
    Json, Router,
};
use barkeep_core::errors::AppError;
use barkeep_mixology::IndexStats;
use serde::Serialize;
use std::sync::Arc;

/// One associate of an identity with how often it co-occurs
#[derive(Debug, Clone, Serialize)]
pub struct AssociateWeight {
    /// Printed name of the associate
    pub name: String,
    /// Number of times it appears in the associate list
    pub weight: usize,
}

/// Associates of one identity
#[derive(Debug, Clone, Serialize)]
pub struct AssociatesResponse {
    /// The queried identity
    pub identity: String,
    /// Associates grouped by printed name, in corpus order
    pub associates: Vec<AssociateWeight>,
}

/// Cocktail routes handler
pub struct CocktailRoutes;

impl CocktailRoutes {
    /// Create all cocktail routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_cocktail))
            .route("/cocktail", get(Self::handle_cocktail))
            .route("/stats", get(Self::handle_stats))
            .route("/associates/:identity", get(Self::handle_associates))
            .with_state(resources)
    }

    /// Handle GET /cocktail - invent one cocktail
    async fn handle_cocktail(State(resources): State<Arc<ServerResources>>) -> InvocationResponse {
        invoke(&resources)
    }

    /// Handle GET /stats - association index size
    async fn handle_stats(State(resources): State<Arc<ServerResources>>) -> Json<IndexStats> {
        Json(resources.index.stats())
    }

    /// Handle GET /associates/:identity - weighted associate list
    async fn handle_associates(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Path(identity): Path<String>,
    ) -> Result<Json<AssociatesResponse>, AppError> {
        if !resources.index.contains(&identity) {
            let error = AppError::not_found(format!("Ingredient '{identity}'"));
            return Err(match request_id {
                Some(Extension(id)) => error.with_request_id(id.as_str()),
                None => error,
            });
        }

        let associates = resources
            .index
            .weighted_associates(&identity)
            .into_iter()
            .map(|(name, weight)| AssociateWeight {
                name: name.to_owned(),
                weight,
            })
            .collect();

        Ok(Json(AssociatesResponse {
            identity,
            associates,
        }))
    }
}
