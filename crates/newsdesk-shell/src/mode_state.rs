#![forbid(unsafe_code)]

//! Application mode state machine.
//!
//! [`ModeState`] tracks which [`LayoutMode`] is active, whether the canvas
//! is shown, and which history panel (if any) is open. It never touches
//! panel sizes; the shell forwards mode changes to the layout manager.
//!
//! # Transitions
//!
//! | from | command | to |
//! |---|---|---|
//! | any | `switch_to_mode(m)` | `m` |
//! | research | `toggle_canvas()` | research-canvas |
//! | research-canvas | `toggle_canvas()` | research |
//! | chat | `toggle_canvas()` | research-canvas |
//! | any | `back_to_home()` | home |
//! | home | `message_sent(_)` | chat |
//! | any | `deep_research_completed()` | research |
//! | any | `select_history(Report)` | research |
//! | any | `select_history(Canvas)` | research-canvas |

use serde::{Deserialize, Serialize};

use newsdesk_layout::LayoutMode;

/// Which saved-item history a history panel lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    #[default]
    Report,
    Canvas,
}

/// Result of a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: LayoutMode,
    pub to: LayoutMode,
}

impl Transition {
    /// Whether the layout mode changed.
    #[must_use]
    pub fn mode_changed(&self) -> bool {
        self.from != self.to
    }
}

/// Mode, canvas visibility, history panel, and deep research progress.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeState {
    mode: LayoutMode,
    show_canvas: bool,
    history: Option<HistoryKind>,
    #[serde(default)]
    research_running: bool,
}

impl ModeState {
    /// State starting in `mode`.
    #[must_use]
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            show_canvas: mode == LayoutMode::ResearchCanvas,
            history: None,
            research_running: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    #[must_use]
    pub fn show_canvas(&self) -> bool {
        self.show_canvas
    }

    /// Open history panel, if any.
    #[must_use]
    pub fn history(&self) -> Option<HistoryKind> {
        self.history
    }

    /// A deep research run was requested and has not completed yet.
    #[must_use]
    pub fn research_running(&self) -> bool {
        self.research_running
    }

    /// Switch to `mode`. Research modes also set the canvas flag; other
    /// modes leave it untouched.
    pub fn switch_to_mode(&mut self, mode: LayoutMode) -> Transition {
        let from = self.mode;
        self.mode = mode;
        match mode {
            LayoutMode::ResearchCanvas => self.show_canvas = true,
            LayoutMode::Research => self.show_canvas = false,
            LayoutMode::Home | LayoutMode::Chat => {}
        }
        Transition { from, to: mode }
    }

    /// Flip the canvas flag, moving between research and research-canvas.
    pub fn toggle_canvas(&mut self) -> Transition {
        let from = self.mode;
        self.show_canvas = !self.show_canvas;
        self.mode = match (from, self.show_canvas) {
            (LayoutMode::Research, true) | (LayoutMode::Chat, true) => LayoutMode::ResearchCanvas,
            (LayoutMode::ResearchCanvas, false) => LayoutMode::Research,
            (mode, _) => mode,
        };
        Transition {
            from,
            to: self.mode,
        }
    }

    /// Return home, closing canvas and history.
    pub fn back_to_home(&mut self) -> Transition {
        let from = self.mode;
        self.mode = LayoutMode::Home;
        self.show_canvas = false;
        self.history = None;
        Transition {
            from,
            to: LayoutMode::Home,
        }
    }

    pub fn show_history(&mut self, kind: HistoryKind) {
        self.history = Some(kind);
    }

    pub fn hide_history(&mut self) {
        self.history = None;
    }

    /// Open a saved item: reports land in research, canvases in
    /// research-canvas. The history panel closes.
    pub fn select_history(&mut self, kind: HistoryKind) -> Transition {
        let transition = self.switch_to_mode(match kind {
            HistoryKind::Report => LayoutMode::Research,
            HistoryKind::Canvas => LayoutMode::ResearchCanvas,
        });
        self.history = None;
        transition
    }

    /// A chat message was sent; leaves home for chat. A deep research
    /// request stays running until [`deep_research_completed`](Self::deep_research_completed).
    pub fn message_sent(&mut self, deep_research: bool) -> Transition {
        if deep_research {
            self.research_running = true;
        }
        if self.mode == LayoutMode::Home {
            self.switch_to_mode(LayoutMode::Chat)
        } else {
            Transition {
                from: self.mode,
                to: self.mode,
            }
        }
    }

    /// A deep research run finished; its report opens in research.
    pub fn deep_research_completed(&mut self) -> Transition {
        self.research_running = false;
        self.switch_to_mode(LayoutMode::Research)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_canvas_only_in_canvas_mode() {
        assert!(!ModeState::new(LayoutMode::Home).show_canvas());
        assert!(ModeState::new(LayoutMode::ResearchCanvas).show_canvas());
        assert_eq!(ModeState::default().mode(), LayoutMode::Home);
    }

    #[test]
    fn switch_sets_canvas_flag_for_research_modes() {
        let mut state = ModeState::new(LayoutMode::Home);
        state.switch_to_mode(LayoutMode::ResearchCanvas);
        assert!(state.show_canvas());
        state.switch_to_mode(LayoutMode::Chat);
        assert!(state.show_canvas(), "chat leaves the flag alone");
        state.switch_to_mode(LayoutMode::Research);
        assert!(!state.show_canvas());
    }

    #[test]
    fn toggle_canvas_moves_between_research_modes() {
        let mut state = ModeState::new(LayoutMode::Research);
        let t = state.toggle_canvas();
        assert_eq!((t.from, t.to), (LayoutMode::Research, LayoutMode::ResearchCanvas));
        assert!(state.show_canvas());
        let t = state.toggle_canvas();
        assert_eq!(t.to, LayoutMode::Research);
        assert!(!state.show_canvas());
    }

    #[test]
    fn toggle_canvas_from_chat_opens_canvas_mode() {
        let mut state = ModeState::new(LayoutMode::Chat);
        assert_eq!(state.toggle_canvas().to, LayoutMode::ResearchCanvas);
    }

    #[test]
    fn toggle_canvas_on_home_only_flips_flag() {
        let mut state = ModeState::new(LayoutMode::Home);
        let t = state.toggle_canvas();
        assert!(!t.mode_changed());
        assert!(state.show_canvas());
    }

    #[test]
    fn back_to_home_clears_everything() {
        let mut state = ModeState::new(LayoutMode::ResearchCanvas);
        state.show_history(HistoryKind::Canvas);
        state.back_to_home();
        assert_eq!(state, ModeState::new(LayoutMode::Home));
    }

    #[test]
    fn history_selection_picks_mode_and_closes_panel() {
        let mut state = ModeState::new(LayoutMode::Chat);
        state.show_history(HistoryKind::Report);
        assert_eq!(state.history(), Some(HistoryKind::Report));
        assert_eq!(state.select_history(HistoryKind::Canvas).to, LayoutMode::ResearchCanvas);
        assert_eq!(state.history(), None);
        assert!(state.show_canvas());
        assert_eq!(state.select_history(HistoryKind::Report).to, LayoutMode::Research);
        assert!(!state.show_canvas());
    }

    #[test]
    fn message_flow() {
        let mut state = ModeState::new(LayoutMode::Home);
        assert_eq!(state.message_sent(false).to, LayoutMode::Chat);
        assert!(!state.research_running());
        assert!(!state.message_sent(false).mode_changed());
        assert_eq!(state.deep_research_completed().to, LayoutMode::Research);
    }

    #[test]
    fn deep_research_runs_until_completed() {
        let mut state = ModeState::new(LayoutMode::Home);
        assert_eq!(state.message_sent(true).to, LayoutMode::Chat);
        assert!(state.research_running());
        state.message_sent(false);
        assert!(state.research_running(), "plain messages keep the run going");
        state.back_to_home();
        assert!(state.research_running());
        let t = state.deep_research_completed();
        assert_eq!((t.from, t.to), (LayoutMode::Home, LayoutMode::Research));
        assert!(!state.research_running());
    }

    #[test]
    fn older_snapshots_deserialize_without_research_flag() {
        let state: ModeState =
            serde_json::from_str(r#"{"mode":"chat","show_canvas":false,"history":null}"#).unwrap();
        assert_eq!(state, ModeState::new(LayoutMode::Chat));
    }
}
