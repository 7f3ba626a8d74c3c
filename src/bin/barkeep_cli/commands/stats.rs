// ABOUTME: Index statistics command for barkeep-cli
// ABOUTME: Reports graph size and the most connected ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barkeep_mixology::AssociationIndex;

use crate::helpers::display::display_index_stats;

/// Print index statistics and the `top` identities with the longest associate lists
pub fn run(index: &AssociationIndex, top: usize) {
    let mut connected: Vec<(&str, usize)> = index
        .identities()
        .iter()
        .map(|identity| (identity.as_str(), index.associates(identity).len()))
        .collect();
    // Stable sort keeps corpus order among ties
    connected.sort_by(|a, b| b.1.cmp(&a.1));
    connected.truncate(top);

    display_index_stats(&index.stats(), &connected);
}
