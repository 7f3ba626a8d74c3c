// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Units, corpus resource naming, synthesis bounds, service names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Measurement units with special display handling
pub mod units {
    /// Centiliter unit as written in the corpus
    pub const CENTILITERS: &str = "cl";
    /// Milliliter unit used for display
    pub const MILLILITERS: &str = "ml";
    /// Milliliters per centiliter
    pub const CENTILITERS_TO_MILLILITERS: f64 = 10.0;
}

/// Recipe corpus resource
pub mod corpus {
    /// Conventional file name of the corpus, looked up next to the executable
    pub const RECIPES_FILE_NAME: &str = "recipes.json";
}

/// Bounds of the random-walk synthesis
pub mod synthesis {
    /// Fewest ingredients a synthesized cocktail aims for
    pub const MIN_INGREDIENTS: usize = 2;
    /// Extra ingredients drawn on top of the minimum (inclusive)
    pub const MAX_EXTRA_INGREDIENTS: usize = 3;
    /// Fewest name fragments drawn
    pub const MIN_NAME_FRAGMENTS: usize = 2;
}

/// Service names
pub mod service_names {
    /// Barkeep server service name
    pub const BARKEEP_SERVER: &str = "barkeep_server";
    /// Health service
    pub const HEALTH: &str = "health";
}

/// Default network settings
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
}

/// CORS header values for the cocktail endpoint
pub mod cors {
    /// Wildcard used for origin, methods, and headers
    pub const ALLOW_ALL: &str = "*";
}
