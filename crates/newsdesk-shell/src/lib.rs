#![forbid(unsafe_code)]

//! Newsdesk shell.
//!
//! # Role in newsdesk
//! `newsdesk-shell` is the orchestrator. It consumes input events from
//! `newsdesk-core`, keeps the application [`ModeState`], and drives the
//! `newsdesk-layout` engine: mode changes reset panel sizes, pointer events
//! on handles become drags, and resizes feed the container width observer.
//!
//! # Key Components
//!
//! - [`Shell`] - event routing and command dispatch
//! - [`ModeState`] - mode, canvas, and history panel state machine
//! - [`ShellCommand`] - messages emitted by the toolbar and panels
//! - [`ShellConfig`] - TOML/JSON configuration

pub mod command;
pub mod config;
pub mod mode_state;
pub mod shell;

pub use command::{ShellCommand, ToolbarButton, ToolbarButtonId, toolbar_buttons};
pub use config::{ShellConfig, ShellConfigError};
pub use mode_state::{HistoryKind, ModeState, Transition};
pub use shell::{EventOutcome, Shell};
