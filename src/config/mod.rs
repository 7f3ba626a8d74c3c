// ABOUTME: Configuration module for server settings resolved at startup
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Barkeep server
//!
//! Configuration comes from environment variables only. The synthesis path
//! itself takes no configuration; these settings cover where the corpus lives,
//! where the server listens, and how it logs.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
