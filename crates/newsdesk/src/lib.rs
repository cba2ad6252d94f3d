#![forbid(unsafe_code)]

//! Newsdesk public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding the
//! newsdesk layout engine. It re-exports common types from the internal
//! crates and offers a lightweight prelude.
//!
//! ```
//! use newsdesk::prelude::*;
//!
//! let mut shell = Shell::new(ShellConfig::default())?;
//! shell.handle_event(&Event::Resize { width: 1280.0, height: 720.0 });
//! shell.dispatch(ShellCommand::ModeSwitch(LayoutMode::Research));
//! assert_eq!(shell.frame().slots.len(), 2);
//! # Ok::<(), newsdesk::Error>(())
//! ```

pub mod error;

pub use error::{Error, RecoveryAction, Result};

// --- Core re-exports -------------------------------------------------------

pub use newsdesk_core::event::{
    Event, Modifiers, PointerButton, PointerEvent, PointerEventKind,
};
pub use newsdesk_core::geometry::{Rect, Sides};
#[cfg(feature = "tracing-json")]
pub use newsdesk_core::logging::init_subscriber;

// --- Layout re-exports -----------------------------------------------------

pub use newsdesk_layout::{
    ColumnBreakpoints, ContainerWidthObserver, DragEffect, LayoutConfig, LayoutConfigRegistry,
    LayoutError, LayoutFrame, LayoutManager, LayoutMetrics, LayoutMode, NewsColumns, PanelContent,
    PanelKind, PanelSlot, ResizeController, ResizeError, Shape,
};

// --- Shell re-exports ------------------------------------------------------

#[cfg(feature = "shell")]
pub use newsdesk_shell::{
    EventOutcome, HistoryKind, ModeState, Shell, ShellCommand, ShellConfig, ToolbarButton,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Event, LayoutFrame, LayoutManager, LayoutMode, PanelKind, PointerEvent, Rect,
        Result,
    };

    #[cfg(feature = "shell")]
    pub use crate::{Shell, ShellCommand, ShellConfig};

    pub use crate::{core, layout};

    #[cfg(feature = "shell")]
    pub use crate::shell;
}

pub use newsdesk_core as core;
pub use newsdesk_layout as layout;
#[cfg(feature = "shell")]
pub use newsdesk_shell as shell;
