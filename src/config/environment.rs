// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Resolves listen address, corpus location, environment, and log level from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the Barkeep server

use crate::corpus::default_corpus_path;
use anyhow::{Context, Result};
use barkeep_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    #[default]
    Info,
    /// Debug output including synthesis traces
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration resolved once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind host
    pub host: String,
    /// Location of the recipe corpus
    pub recipes_path: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is not a valid port number, or if no
    /// corpus path is configured and the executable's directory cannot be
    /// determined.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let recipes_path = match env::var("BARKEEP_RECIPES_PATH") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_corpus_path().context("Cannot locate the default recipe corpus")?,
        };

        Ok(Self {
            http_port,
            host: env_var_or("HOST", defaults::HOST),
            recipes_path,
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "")),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
        })
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Barkeep Server Configuration:\n\
             - HTTP Port: {}\n\
             - Host: {}\n\
             - Recipes: {}\n\
             - Environment: {}\n\
             - Log Level: {}",
            self.http_port,
            self.host,
            self.recipes_path.display(),
            self.environment,
            self.log_level,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default(""), Environment::Development);
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_summary_lists_every_setting() {
        let config = ServerConfig {
            http_port: 9000,
            host: "0.0.0.0".into(),
            recipes_path: PathBuf::from("/srv/recipes.json"),
            environment: Environment::Production,
            log_level: LogLevel::Debug,
        };

        let summary = config.summary();
        assert!(summary.contains("HTTP Port: 9000"));
        assert!(summary.contains("Recipes: /srv/recipes.json"));
        assert!(summary.contains("Environment: production"));
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
