// ABOUTME: HTTP server assembly and lifecycle for the cocktail service
// ABOUTME: Wires routes and middleware layers, binds the listener, and shuts down on signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{CocktailRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Cocktail HTTP server
pub struct Server {
    resources: Arc<ServerResources>,
}

impl Server {
    /// Create a server over prebuilt resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Full application router with every middleware layer applied
    pub fn router(&self) -> Router {
        Router::new()
            .merge(CocktailRoutes::routes(Arc::clone(&self.resources)))
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::new())
                    .layer(middleware::from_fn(request_id_middleware))
                    .layer(TraceLayer::new_for_http())
                    .layer(setup_cors()),
            )
    }

    /// Serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self) -> Result<()> {
        let addr = self.resources.config.bind_address();
        let app = self.router();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        info!("Barkeep HTTP server listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Barkeep HTTP server stopped");
        Ok(())
    }
}

/// Resolve on Ctrl-C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => info!("Received terminate signal, initiating graceful shutdown"),
    }
}
