// ABOUTME: Ingredient record from the recipe corpus with display-name resolution and rendering
// ABOUTME: Implements printed-name precedence and the centiliter to milliliter display rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{CENTILITERS, CENTILITERS_TO_MILLILITERS, MILLILITERS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a recipe: an amount of something, or a free-text "special" item
///
/// The `ingredient` field is the identity used as a node in the association
/// graph. Special items ("ice", "a pinch of salt") have an empty identity: they
/// appear in recipes but are never graph nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ingredient {
    /// Measurement unit as written in the corpus (`cl`, `ml`, `dash`, ...)
    pub unit: String,
    /// Quantity in `unit`
    pub amount: f64,
    /// Optional display label overriding the identity
    pub label: String,
    /// Canonical ingredient name used for graph edges; empty for special items
    #[serde(rename = "ingredient")]
    pub identity: String,
    /// Optional free text that replaces the whole rendering
    pub special: String,
}

impl Ingredient {
    /// Create a measured ingredient
    #[must_use]
    pub fn measured(identity: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            amount,
            identity: identity.into(),
            ..Self::default()
        }
    }

    /// Create a free-text special item with no graph identity
    #[must_use]
    pub fn special(text: impl Into<String>) -> Self {
        Self {
            special: text.into(),
            ..Self::default()
        }
    }

    /// Set the display label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Canonical graph identity (may be empty)
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// True when the ingredient has no graph identity
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.identity.is_empty()
    }

    /// Display-resolved name: special text, else label, else identity
    #[must_use]
    pub fn printed_name(&self) -> &str {
        if !self.special.is_empty() {
            &self.special
        } else if !self.label.is_empty() {
            &self.label
        } else {
            &self.identity
        }
    }

    /// Amount and unit as they should be shown
    ///
    /// Centiliters are shown as milliliters (amount x10); every other unit is
    /// passed through unchanged.
    #[must_use]
    pub fn display_measure(&self) -> (f64, &str) {
        if self.unit == CENTILITERS {
            (self.amount * CENTILITERS_TO_MILLILITERS, MILLILITERS)
        } else {
            (self.amount, &self.unit)
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.special.is_empty() {
            return f.write_str(&self.special);
        }

        let (amount, unit) = self.display_measure();
        write!(
            f,
            "{} {} {}",
            format_amount(amount),
            unit,
            self.printed_name()
        )
    }
}

/// Format a quantity in compact general form
///
/// Shortest round-trip digits with no padding or trailing zeros (`20`, `1.5`,
/// `0.25`). Exponents below -4 or from 6 upward switch to exponent form with a
/// signed, at least two-digit exponent (`1e+06`, `5e-05`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() || amount == 0.0 {
        return format!("{amount}");
    }

    let scientific = format!("{amount:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{amount}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{amount}");
    };

    if (-4..6).contains(&exponent) {
        format!("{amount}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
