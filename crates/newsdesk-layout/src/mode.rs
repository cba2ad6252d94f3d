#![forbid(unsafe_code)]

//! Application modes, panel kinds, and layout shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level screen of the dashboard. Exactly one is active at a time.
///
/// Owned by the application shell and passed to the layout engine by value;
/// the engine never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Full-bleed news home with a floating input.
    #[default]
    Home,
    /// News + chat, single panel.
    Chat,
    /// News/chat beside a research report.
    Research,
    /// News/chat, research report, and canvas.
    #[serde(alias = "research+canvas")]
    ResearchCanvas,
}

impl LayoutMode {
    /// Every mode, in declaration order.
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Home,
        LayoutMode::Chat,
        LayoutMode::Research,
        LayoutMode::ResearchCanvas,
    ];

    /// Stable string name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Chat => "chat",
            Self::Research => "research",
            Self::ResearchCanvas => "research-canvas",
        }
    }

    /// Whether the mode shows the research report panel.
    #[must_use]
    pub const fn is_research(self) -> bool {
        matches!(self, Self::Research | Self::ResearchCanvas)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = UnknownLayoutMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "chat" => Ok(Self::Chat),
            "research" => Ok(Self::Research),
            "research-canvas" | "research+canvas" => Ok(Self::ResearchCanvas),
            other => Err(UnknownLayoutMode {
                name: other.to_owned(),
            }),
        }
    }
}

/// A mode name that is not part of the closed [`LayoutMode`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayoutMode {
    pub name: String,
}

impl fmt::Display for UnknownLayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout mode {:?}", self.name)
    }
}

impl std::error::Error for UnknownLayoutMode {}

/// What a panel hosts. Content is supplied externally; the kind only lets the
/// engine check that content lines up with the configured slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    /// Stacked news cards (home screen).
    News,
    /// News column plus chat conversation.
    NewsChat,
    /// Research report viewer.
    Research,
    /// Research canvas.
    Canvas,
}

/// Structural arrangement of a mode's panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// One panel, centered and width-capped.
    Single,
    /// All panels stacked in the same box, z-ordered by index.
    Overlay,
    /// Panels left to right, optionally separated by drag handles.
    Horizontal,
}
