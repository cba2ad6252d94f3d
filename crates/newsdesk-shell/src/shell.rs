#![forbid(unsafe_code)]

//! Event routing between the host, the mode state, and the layout engine.
//!
//! [`Shell`] owns one [`ModeState`] and one [`LayoutManager`]. Commands go
//! through [`Shell::dispatch`]; raw input goes through
//! [`Shell::handle_event`]:
//!
//! - primary press on a handle's hit area starts a drag;
//! - motion while dragging updates sizes from the observed root width;
//! - release ends the drag;
//! - `Resize` records the root width and flushes width subscribers;
//! - `Focus(false)` and `PointerCaptureLost` cancel any drag.

use newsdesk_core::event::{Event, PointerButton, PointerEvent, PointerEventKind};
use newsdesk_core::geometry::Rect;
use newsdesk_layout::{
    DragEffect, LayoutError, LayoutFrame, LayoutManager, NewsColumns, ResizeError,
};
use tracing::{debug, warn};

use crate::command::{ShellCommand, ToolbarButton, toolbar_buttons};
use crate::config::{ShellConfig, ShellConfigError};
use crate::mode_state::{ModeState, Transition};

/// What an input event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// Nothing relevant to layout.
    Ignored,
    DragStarted { handle_index: usize },
    DragUpdated(DragEffect),
    DragEnded,
    /// A drag was force-ended by focus or capture loss.
    DragCanceled,
    /// The root was resized; `notified` width subscribers ran.
    Resized { notified: usize },
}

/// Mode state plus layout engine.
#[derive(Debug)]
pub struct Shell {
    config: ShellConfig,
    state: ModeState,
    layout: LayoutManager,
    area: Rect,
}

impl Shell {
    /// Build a shell from a validated config.
    pub fn new(config: ShellConfig) -> Result<Self, ShellConfigError> {
        let config = config.validated()?;
        let state = ModeState::new(config.initial_mode);
        let layout = LayoutManager::with_metrics(config.initial_mode, config.metrics);
        Ok(Self {
            config,
            state,
            layout,
            area: Rect::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ModeState {
        &self.state
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }

    /// Last area reported by a `Resize` event.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Apply a command. A mode change resets panel sizes.
    pub fn dispatch(&mut self, command: ShellCommand) -> Transition {
        let transition = match command {
            ShellCommand::ModeSwitch(mode) => self.state.switch_to_mode(mode),
            ShellCommand::ToggleCanvas => self.state.toggle_canvas(),
            ShellCommand::BackToHome => self.state.back_to_home(),
            ShellCommand::SendMessage { deep_research } => {
                self.state.message_sent(deep_research)
            }
            ShellCommand::DeepResearchCompleted => self.state.deep_research_completed(),
            ShellCommand::ShowHistory(kind) => {
                self.state.show_history(kind);
                self.unchanged()
            }
            ShellCommand::HideHistory => {
                self.state.hide_history();
                self.unchanged()
            }
            ShellCommand::SelectHistory(kind) => self.state.select_history(kind),
        };

        debug!(
            target: "newsdesk.shell",
            command = ?command,
            from = %transition.from,
            to = %transition.to,
            show_canvas = self.state.show_canvas(),
            research_running = self.state.research_running(),
            "command dispatched"
        );
        if transition.mode_changed() {
            self.layout.set_mode(transition.to);
        }
        transition
    }

    fn unchanged(&self) -> Transition {
        let mode = self.state.mode();
        Transition { from: mode, to: mode }
    }

    /// Route one input event.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match *event {
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::Resize { width, height } => {
                self.area = Rect::from_size(width.max(0.0), height.max(0.0));
                self.layout.observe_width(width);
                let notified = self.layout.observer().flush();
                EventOutcome::Resized { notified }
            }
            Event::Focus(false) | Event::PointerCaptureLost => {
                if self.layout.handle_capture_lost() {
                    EventOutcome::DragCanceled
                } else {
                    EventOutcome::Ignored
                }
            }
            Event::Focus(true) => EventOutcome::Ignored,
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> EventOutcome {
        match pointer.kind {
            PointerEventKind::Down(PointerButton::Primary) => {
                let Some(handle_index) = self.frame().handle_at(pointer.x, pointer.y) else {
                    return EventOutcome::Ignored;
                };
                self.begin_drag(handle_index, pointer.x)
            }
            PointerEventKind::Moved if self.layout.is_dragging() => {
                match self.layout.handle_pointer_move(pointer.x) {
                    Ok(effect) => EventOutcome::DragUpdated(effect),
                    Err(err) => {
                        warn!(target: "newsdesk.shell", %err, "drag update rejected");
                        EventOutcome::Ignored
                    }
                }
            }
            PointerEventKind::Up(PointerButton::Primary) => {
                if self.layout.handle_pointer_up() {
                    EventOutcome::DragEnded
                } else {
                    EventOutcome::Ignored
                }
            }
            _ => EventOutcome::Ignored,
        }
    }

    fn begin_drag(&mut self, handle_index: usize, x: f64) -> EventOutcome {
        match self.layout.handle_pointer_down(handle_index, x) {
            Ok(()) => EventOutcome::DragStarted { handle_index },
            Err(LayoutError::Resize(ResizeError::DragAlreadyInProgress { .. })) => {
                // The previous release never arrived.
                warn!(target: "newsdesk.shell", handle_index, "replacing stale drag");
                self.layout.handle_capture_lost();
                match self.layout.handle_pointer_down(handle_index, x) {
                    Ok(()) => EventOutcome::DragStarted { handle_index },
                    Err(_) => EventOutcome::Ignored,
                }
            }
            Err(err) => {
                warn!(target: "newsdesk.shell", %err, "drag start rejected");
                EventOutcome::Ignored
            }
        }
    }

    /// Layout for the last known area.
    #[must_use]
    pub fn frame(&self) -> LayoutFrame {
        self.layout.frame(self.area)
    }

    /// Toolbar buttons when the active mode has a toolbar.
    #[must_use]
    pub fn toolbar(&self) -> Vec<ToolbarButton> {
        if self.layout.config().has_toolbar {
            toolbar_buttons(&self.state)
        } else {
            Vec::new()
        }
    }

    /// News grid columns for panel `key`.
    #[must_use]
    pub fn columns_for(&self, key: &str) -> Option<NewsColumns> {
        self.frame()
            .slot(key)
            .map(|slot| self.config.columns.for_slot(slot))
    }
}
