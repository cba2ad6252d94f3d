#![forbid(unsafe_code)]

//! Responsive column selection for panel content.
//!
//! [`ColumnBreakpoints`] maps a slot's size to a [`NewsColumns`] tier. When
//! the slot's pixel width is known the pixel thresholds decide; before the
//! first non-zero layout pass only the percentage share is available and the
//! percentage thresholds decide instead.
//!
//! # Invariants
//!
//! 1. Tiers are monotone: a wider slot never gets fewer columns.
//! 2. `classify()` never fails; unknown or zero widths fall back to the
//!    percentage rule.

use serde::{Deserialize, Serialize};

use crate::manager::PanelSlot;

/// Column count for a news grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsColumns {
    One = 1,
    Two = 2,
    Three = 3,
}

impl NewsColumns {
    /// Number of columns.
    #[must_use]
    pub const fn count(self) -> usize {
        self as usize
    }
}

/// Thresholds for [`NewsColumns`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnBreakpoints {
    /// Minimum share (percent) for three columns.
    pub three_min_pct: f64,
    /// Minimum share (percent) for two columns.
    pub two_min_pct: f64,
    /// Minimum pixel width for three columns.
    pub three_min_px: f64,
    /// Minimum pixel width for two columns.
    pub two_min_px: f64,
}

impl ColumnBreakpoints {
    /// 55% / 35% share, 960 px / 600 px width.
    pub const DEFAULT: Self = Self {
        three_min_pct: 55.0,
        two_min_pct: 35.0,
        three_min_px: 960.0,
        two_min_px: 600.0,
    };

    /// Pick a tier from a percentage share and optional pixel width.
    #[must_use]
    pub fn classify(&self, width_pct: f64, width_px: Option<f64>) -> NewsColumns {
        match width_px.filter(|px| px.is_finite() && *px > 0.0) {
            Some(px) if px >= self.three_min_px => NewsColumns::Three,
            Some(px) if px >= self.two_min_px => NewsColumns::Two,
            Some(_) => NewsColumns::One,
            None if width_pct >= self.three_min_pct => NewsColumns::Three,
            None if width_pct >= self.two_min_pct => NewsColumns::Two,
            None => NewsColumns::One,
        }
    }

    /// Pick a tier for a rendered slot.
    #[must_use]
    pub fn for_slot(&self, slot: &PanelSlot) -> NewsColumns {
        self.classify(slot.width_pct, slot.width_px)
    }

    /// Validate ordering of the thresholds.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.two_min_pct > self.three_min_pct {
            errors.push(format!(
                "columns: two_min_pct ({}) must be <= three_min_pct ({})",
                self.two_min_pct, self.three_min_pct
            ));
        }
        if self.two_min_px > self.three_min_px {
            errors.push(format!(
                "columns: two_min_px ({}) must be <= three_min_px ({})",
                self.two_min_px, self.three_min_px
            ));
        }
        errors
    }
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}
