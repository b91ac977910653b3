//! Deck construction rules.
//!
//! `DeckRules` carries every tunable bound the validator and the deck
//! editor enforce. The defaults are the standard tournament format:
//! 40-60 main, up to 15 extra, up to 15 side, 3 copies per card and a
//! 5-card opening hand.

use serde::{Deserialize, Serialize};

use super::error::DeckError;
use crate::deck::DeckZone;

/// Deck construction rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// Minimum main deck size (default: 40).
    pub main_min: usize,

    /// Maximum main deck size (default: 60).
    pub main_max: usize,

    /// Maximum extra deck size (default: 15).
    pub extra_max: usize,

    /// Maximum side deck size (default: 15).
    pub side_max: usize,

    /// Hard cap on copies the editor lets you add (default: 3).
    /// Banlist limits below this are reported by the validator instead.
    pub max_copies: usize,

    /// Opening hand size used for advisory odds (default: 5).
    pub hand_size: usize,

    /// Brick opening probability, in percent, above which the validator
    /// warns (default: 20.0).
    pub brick_warning_threshold: f64,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            main_min: 40,
            main_max: 60,
            extra_max: 15,
            side_max: 15,
            max_copies: 3,
            hand_size: 5,
            brick_warning_threshold: 20.0,
        }
    }
}

impl DeckRules {
    /// Load rules from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the bounds are consistent with each other.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.main_min > self.main_max {
            return Err(DeckError::InvalidRules(format!(
                "main_min ({}) exceeds main_max ({})",
                self.main_min, self.main_max
            )));
        }
        if self.hand_size == 0 {
            return Err(DeckError::InvalidRules("hand_size must be positive".into()));
        }
        if !(0.0..=100.0).contains(&self.brick_warning_threshold) {
            return Err(DeckError::InvalidRules(format!(
                "brick_warning_threshold ({}) must be a percentage",
                self.brick_warning_threshold
            )));
        }
        Ok(())
    }

    /// Maximum number of cards a zone may hold.
    #[must_use]
    pub fn max_for(&self, zone: DeckZone) -> usize {
        match zone {
            DeckZone::Main => self.main_max,
            DeckZone::Extra => self.extra_max,
            DeckZone::Side => self.side_max,
        }
    }

    #[must_use]
    pub fn with_main_bounds(mut self, min: usize, max: usize) -> Self {
        self.main_min = min;
        self.main_max = max;
        self
    }

    #[must_use]
    pub fn with_extra_max(mut self, max: usize) -> Self {
        self.extra_max = max;
        self
    }

    #[must_use]
    pub fn with_side_max(mut self, max: usize) -> Self {
        self.side_max = max;
        self
    }

    #[must_use]
    pub fn with_max_copies(mut self, max: usize) -> Self {
        self.max_copies = max;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_brick_warning_threshold(mut self, percent: f64) -> Self {
        self.brick_warning_threshold = percent;
        self
    }
}
