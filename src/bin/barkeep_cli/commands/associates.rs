// ABOUTME: Associate listing command for barkeep-cli
// ABOUTME: Shows which ingredients co-occur with one identity and how often
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barkeep_mixology::AssociationIndex;
use barkeep_server::errors::{AppError, AppResult};

use crate::helpers::display::display_associates;

/// Print the weighted associates of `identity`
pub fn run(index: &AssociationIndex, identity: &str) -> AppResult<()> {
    if !index.contains(identity) {
        return Err(AppError::not_found(format!("Ingredient '{identity}'")));
    }

    display_associates(identity, &index.weighted_associates(identity));
    Ok(())
}
