// ABOUTME: Main library entry point for the Barkeep cocktail service
// ABOUTME: Loads the recipe corpus, serves invented cocktails over HTTP, and backs the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barkeep Server
//!
//! Invents cocktails nobody has mixed before. A fixed corpus of known recipes
//! is turned into an ingredient co-occurrence graph once at startup; every
//! request then walks that graph from a random ingredient, collects a handful
//! of companions, and borrows words from real recipe names to christen the
//! result.
//!
//! ## Architecture
//!
//! - **Corpus**: strict JSON recipe loading, fatal on any schema violation
//! - **Resources**: the corpus and its association index, shared read-only
//! - **Handler**: the per-call catch boundary producing a complete response
//! - **Routes / Middleware / Server**: the axum HTTP surface
//! - **Config / Logging**: environment-driven settings and tracing setup
//!
//! The algorithms live in `barkeep-mixology`; the data model and error types
//! in `barkeep-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barkeep_server::config::ServerConfig;
//! use barkeep_server::handler::invoke;
//! use barkeep_server::resources::ServerResources;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::load(config)?;
//!
//!     let response = invoke(&resources);
//!     println!("{} {}", response.status_code, response.body);
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Recipe corpus loading
pub mod corpus;

/// Unified error types, shared with the core crate
pub use barkeep_core::errors;

/// Invocation boundary for a single cocktail
pub mod handler;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared read-only server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;
