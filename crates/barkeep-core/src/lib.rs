// ABOUTME: Core types and constants for the Barkeep cocktail synthesizer
// ABOUTME: Foundation crate with error handling, the recipe corpus model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barkeep Core
//!
//! Foundation crate providing shared types and constants for Barkeep. This
//! crate is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: The recipe corpus model (`Recipe`, `Ingredient`)
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe corpus data model
pub mod models;
