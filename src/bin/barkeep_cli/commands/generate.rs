// ABOUTME: Cocktail generation command for barkeep-cli
// ABOUTME: Invents a batch of cocktails, optionally seeded, as text cards or JSON lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use barkeep_mixology::{AssociationIndex, Synthesizer};
use barkeep_server::{
    corpus::Corpus,
    errors::{AppError, AppResult},
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::helpers::display::{display_cocktail_card, display_cocktail_json};

type Result<T> = AppResult<T>;

/// Invent `count` cocktails
///
/// A failed synthesis is reported and skipped; the command only fails when
/// every attempt failed.
pub fn run(
    corpus: &Corpus,
    index: &AssociationIndex,
    count: usize,
    json: bool,
    seed: Option<u64>,
) -> Result<()> {
    let synthesizer = Synthesizer::new(index, corpus.recipes());
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            debug!(seed, "Using seeded generator");
            Box::new(ChaCha8Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let mut last_error = None;
    let mut served = 0_usize;

    for attempt in 1..=count {
        match synthesizer.synthesize(&mut *rng) {
            Ok(cocktail) => {
                let card = cocktail.rendered();
                if json {
                    display_cocktail_json(&card)?;
                } else {
                    display_cocktail_card(&cocktail);
                }
                served += 1;
            }
            Err(e) => {
                warn!(attempt, "Cocktail synthesis failed: {e}");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if served == 0 => Err(AppError::from(e)),
        _ => Ok(()),
    }
}
