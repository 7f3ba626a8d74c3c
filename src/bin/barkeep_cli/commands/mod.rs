// ABOUTME: Re-exports command modules for barkeep-cli
// ABOUTME: Provides the generate, stats, and associates subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod associates;
pub mod generate;
pub mod stats;
