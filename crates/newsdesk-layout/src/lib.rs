#![forbid(unsafe_code)]

//! Adaptive multi-panel layout engine.
//!
//! # Role in newsdesk
//! `newsdesk-layout` decides, per [`LayoutMode`], which panels are shown and
//! how wide each one is, and keeps user-driven divider drags inside hard
//! bounds: widths always sum to 100% and no panel shrinks below its minimum.
//!
//! # Primary responsibilities
//! - **config**: the static mode → [`LayoutConfig`] table.
//! - **resize**: the N-panel [`ResizeController`] (anchor-based drag math).
//! - **manager**: [`LayoutManager`], which turns a mode plus sizes into a
//!   [`LayoutFrame`] of slots and handles.
//! - **observer**: [`ContainerWidthObserver`], the pixel width of the root.
//! - **responsive**: [`ColumnBreakpoints`] for panel content.
//!
//! # Example
//!
//! ```
//! use newsdesk_core::geometry::Rect;
//! use newsdesk_layout::{LayoutManager, LayoutMode};
//!
//! let mut manager = LayoutManager::new(LayoutMode::Research);
//! manager.observe_width(1000.0);
//! manager.handle_pointer_down(0, 600.0).unwrap();
//! manager.handle_pointer_move(700.0).unwrap();
//! manager.handle_pointer_up();
//! assert_eq!(manager.sizes(), &[70.0, 30.0]);
//!
//! let frame = manager.frame(Rect::from_size(1000.0, 800.0));
//! assert_eq!(frame.slots.len(), 2);
//! assert_eq!(frame.handles.len(), 1);
//! ```

pub mod config;
pub mod manager;
pub mod mode;
pub mod observer;
pub mod resize;
pub mod responsive;

pub use config::{ConfigIssue, LayoutConfig, LayoutConfigRegistry, PanelConfig};
pub use manager::{
    FilledSlot, HandleRegion, LayoutError, LayoutFrame, LayoutManager, LayoutMetrics,
    PanelContent, PanelSlot,
};
pub use mode::{LayoutMode, PanelKind, Shape, UnknownLayoutMode};
pub use newsdesk_core::geometry::{Rect, Sides};
pub use observer::{ContainerWidthObserver, SubId, Subscription};
pub use resize::{
    DragAnchor, DragClamp, DragEffect, DragNoopReason, MIN_CONTAINER_WIDTH_PX, ResizeController,
    ResizeError, ResizeState, SIZE_EPSILON,
};
pub use responsive::{ColumnBreakpoints, NewsColumns};
