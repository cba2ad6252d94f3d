#![forbid(unsafe_code)]

//! Declarative per-mode layout table.
//!
//! Each [`LayoutMode`] maps to exactly one immutable [`LayoutConfig`]. The
//! table is `'static` data: loaded with the binary, never mutated, and cheap
//! to resolve on every render.
//!
//! | mode | shape | panels (key : initial% / min%) | resizable | toolbar |
//! |---|---|---|---|---|
//! | home | overlay | news-home : 100 / — | no | no |
//! | chat | horizontal | news-chat : 100 / — | no | yes |
//! | research | horizontal | news-chat : 60/40, research : 40/30 | yes | yes |
//! | research-canvas | horizontal | news-chat : 50/30, research : 25/20, canvas : 25/20 | yes | yes |
//!
//! # Invariants
//!
//! 1. `initial_width_pct` values of a config sum to 100.
//! 2. `min_width_pct <= initial_width_pct` for every panel.
//! 3. Panel keys are unique within a config.
//! 4. `Single` configs have exactly one panel; resizable configs have at
//!    least two and are `Horizontal`.

use std::fmt;

use serde::Serialize;

use crate::mode::{LayoutMode, PanelKind, Shape};
use crate::resize::SIZE_EPSILON;

/// One panel of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelConfig {
    pub kind: PanelKind,
    /// Stable identity matching this entry to its content and size index.
    pub key: &'static str,
    pub initial_width_pct: f64,
    /// `0.0` when the panel has no configured minimum.
    pub min_width_pct: f64,
}

impl PanelConfig {
    pub const fn new(
        kind: PanelKind,
        key: &'static str,
        initial_width_pct: f64,
        min_width_pct: f64,
    ) -> Self {
        Self {
            kind,
            key,
            initial_width_pct,
            min_width_pct,
        }
    }
}

/// Immutable composition of panels for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    pub shape: Shape,
    pub panels: &'static [PanelConfig],
    pub resizable: bool,
    pub has_toolbar: bool,
}

impl LayoutConfig {
    /// Number of panels.
    #[must_use]
    pub const fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Number of drag handles rendered for this config.
    #[must_use]
    pub const fn handle_count(&self) -> usize {
        if self.resizable && self.panels.len() > 1 {
            self.panels.len() - 1
        } else {
            0
        }
    }

    /// Initial widths in panel order.
    #[must_use]
    pub fn initial_sizes(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.initial_width_pct).collect()
    }

    /// Minimum widths in panel order.
    #[must_use]
    pub fn min_sizes(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.min_width_pct).collect()
    }

    /// Index of the panel with `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.key == key)
    }

    /// Check the table invariants, returning every violation found.
    pub fn validate(&self) -> Result<(), Vec<ConfigIssue>> {
        let mut issues = Vec::new();

        if self.panels.is_empty() {
            issues.push(ConfigIssue::NoPanels);
        }

        let sum: f64 = self.panels.iter().map(|p| p.initial_width_pct).sum();
        if !self.panels.is_empty() && (sum - 100.0).abs() > SIZE_EPSILON {
            issues.push(ConfigIssue::InitialSumNot100 { sum });
        }

        for (index, panel) in self.panels.iter().enumerate() {
            if panel.min_width_pct < 0.0 || panel.min_width_pct > panel.initial_width_pct {
                issues.push(ConfigIssue::MinExceedsInitial {
                    key: panel.key,
                    initial: panel.initial_width_pct,
                    min: panel.min_width_pct,
                });
            }
            if self.panels[..index].iter().any(|p| p.key == panel.key) {
                issues.push(ConfigIssue::DuplicateKey { key: panel.key });
            }
        }

        if self.shape == Shape::Single && self.panels.len() != 1 {
            issues.push(ConfigIssue::ShapeMismatch {
                shape: self.shape,
                panels: self.panels.len(),
            });
        }
        if self.resizable && (self.shape != Shape::Horizontal || self.panels.len() < 2) {
            issues.push(ConfigIssue::ShapeMismatch {
                shape: self.shape,
                panels: self.panels.len(),
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// A violated table invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    NoPanels,
    InitialSumNot100 { sum: f64 },
    MinExceedsInitial {
        key: &'static str,
        initial: f64,
        min: f64,
    },
    DuplicateKey { key: &'static str },
    ShapeMismatch { shape: Shape, panels: usize },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPanels => write!(f, "layout has no panels"),
            Self::InitialSumNot100 { sum } => {
                write!(f, "initial widths sum to {sum}, expected 100")
            }
            Self::MinExceedsInitial { key, initial, min } => write!(
                f,
                "panel {key:?}: min width {min}% outside 0..={initial}%"
            ),
            Self::DuplicateKey { key } => write!(f, "duplicate panel key {key:?}"),
            Self::ShapeMismatch { shape, panels } => {
                write!(f, "shape {shape:?} cannot hold {panels} panel(s) as configured")
            }
        }
    }
}

static HOME_PANELS: [PanelConfig; 1] = [PanelConfig::new(PanelKind::News, "news-home", 100.0, 0.0)];

static CHAT_PANELS: [PanelConfig; 1] =
    [PanelConfig::new(PanelKind::NewsChat, "news-chat", 100.0, 0.0)];

static RESEARCH_PANELS: [PanelConfig; 2] = [
    PanelConfig::new(PanelKind::NewsChat, "news-chat", 60.0, 40.0),
    PanelConfig::new(PanelKind::Research, "research", 40.0, 30.0),
];

static RESEARCH_CANVAS_PANELS: [PanelConfig; 3] = [
    PanelConfig::new(PanelKind::NewsChat, "news-chat", 50.0, 30.0),
    PanelConfig::new(PanelKind::Research, "research", 25.0, 20.0),
    PanelConfig::new(PanelKind::Canvas, "canvas", 25.0, 20.0),
];

static HOME: LayoutConfig = LayoutConfig {
    mode: LayoutMode::Home,
    shape: Shape::Overlay,
    panels: &HOME_PANELS,
    resizable: false,
    has_toolbar: false,
};

static CHAT: LayoutConfig = LayoutConfig {
    mode: LayoutMode::Chat,
    shape: Shape::Horizontal,
    panels: &CHAT_PANELS,
    resizable: false,
    has_toolbar: true,
};

static RESEARCH: LayoutConfig = LayoutConfig {
    mode: LayoutMode::Research,
    shape: Shape::Horizontal,
    panels: &RESEARCH_PANELS,
    resizable: true,
    has_toolbar: true,
};

static RESEARCH_CANVAS: LayoutConfig = LayoutConfig {
    mode: LayoutMode::ResearchCanvas,
    shape: Shape::Horizontal,
    panels: &RESEARCH_CANVAS_PANELS,
    resizable: true,
    has_toolbar: true,
};

/// Static lookup from [`LayoutMode`] to its [`LayoutConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutConfigRegistry;

impl LayoutConfigRegistry {
    /// Resolve the config for `mode`. Total over the closed mode set.
    #[must_use]
    pub fn resolve(mode: LayoutMode) -> &'static LayoutConfig {
        let config = match mode {
            LayoutMode::Home => &HOME,
            LayoutMode::Chat => &CHAT,
            LayoutMode::Research => &RESEARCH,
            LayoutMode::ResearchCanvas => &RESEARCH_CANVAS,
        };
        debug_assert!(config.validate().is_ok(), "invalid layout table entry for {mode}");
        config
    }

    /// Resolve by mode name.
    ///
    /// # Panics
    ///
    /// Panics on a name outside the closed mode set. There is no default
    /// layout to fall back to; parse with [`LayoutMode::from_str`] first when
    /// the name comes from outside the program.
    ///
    /// [`LayoutMode::from_str`]: std::str::FromStr::from_str
    #[must_use]
    pub fn resolve_name(name: &str) -> &'static LayoutConfig {
        match name.parse::<LayoutMode>() {
            Ok(mode) => Self::resolve(mode),
            Err(err) => panic!("{err}: no layout is defined for it"),
        }
    }

    /// Every config in mode order.
    pub fn all() -> impl Iterator<Item = &'static LayoutConfig> {
        LayoutMode::ALL.into_iter().map(Self::resolve)
    }
}
