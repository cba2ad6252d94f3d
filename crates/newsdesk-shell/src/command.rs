#![forbid(unsafe_code)]

//! Shell commands and the toolbar that emits them.

use serde::{Deserialize, Serialize};

use newsdesk_layout::LayoutMode;

use crate::mode_state::{HistoryKind, ModeState};

/// A request to change application mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum ShellCommand {
    /// Switch to a specific mode.
    ModeSwitch(LayoutMode),
    /// Show or hide the canvas panel.
    ToggleCanvas,
    /// Return to the home screen.
    BackToHome,
    /// A chat message was sent; `deep_research` starts a research run
    /// that ends with [`DeepResearchCompleted`](Self::DeepResearchCompleted).
    SendMessage { deep_research: bool },
    /// A deep research run produced its report.
    DeepResearchCompleted,
    ShowHistory(HistoryKind),
    HideHistory,
    /// A saved item was picked from the history panel.
    SelectHistory(HistoryKind),
}

/// Identifies a toolbar button independent of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarButtonId {
    Brand,
    BackToHome,
    OpenResearch,
    OpenCanvas,
    ResearchToggle,
    CanvasToggle,
}

/// One toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolbarButton {
    pub id: ToolbarButtonId,
    pub label: &'static str,
    pub command: ShellCommand,
    /// Rendered pressed.
    pub active: bool,
}

impl ToolbarButton {
    const fn new(id: ToolbarButtonId, label: &'static str, command: ShellCommand) -> Self {
        Self {
            id,
            label,
            command,
            active: false,
        }
    }

    const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Buttons for the current state, left to right.
#[must_use]
pub fn toolbar_buttons(state: &ModeState) -> Vec<ToolbarButton> {
    use ToolbarButtonId as Id;

    let mode = state.mode();
    if mode == LayoutMode::Home {
        return vec![
            ToolbarButton::new(Id::Brand, "Newsdesk", ShellCommand::BackToHome),
            ToolbarButton::new(
                Id::OpenResearch,
                "Research report",
                ShellCommand::ModeSwitch(LayoutMode::Research),
            ),
            ToolbarButton::new(
                Id::OpenCanvas,
                "Canvas",
                ShellCommand::ModeSwitch(LayoutMode::ResearchCanvas),
            ),
        ];
    }

    let research_target = if mode == LayoutMode::Research {
        LayoutMode::Chat
    } else {
        LayoutMode::Research
    };
    vec![
        ToolbarButton::new(Id::BackToHome, "Back to home", ShellCommand::BackToHome),
        ToolbarButton::new(
            Id::ResearchToggle,
            "Research",
            ShellCommand::ModeSwitch(research_target),
        )
        .active(mode.is_research()),
        ToolbarButton::new(Id::CanvasToggle, "Canvas", ShellCommand::ToggleCanvas)
            .active(state.show_canvas()),
    ]
}
