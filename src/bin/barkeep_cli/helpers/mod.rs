// ABOUTME: Re-exports helper modules for barkeep-cli
// ABOUTME: Provides display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
