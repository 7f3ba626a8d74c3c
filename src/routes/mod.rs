// ABOUTME: Route module organization for the Barkeep HTTP endpoints
// ABOUTME: Groups cocktail, index inspection, and health routes by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes, one module per domain. Each module exposes a `XRoutes::routes`
//! constructor taking the shared resources and returning a ready router.

/// Cocktail generation and index inspection routes
pub mod cocktails;
/// Health check and readiness routes
pub mod health;

pub use cocktails::CocktailRoutes;
pub use health::HealthRoutes;
