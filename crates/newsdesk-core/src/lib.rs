#![forbid(unsafe_code)]

//! Core: geometry, input events, and the logging facade.
//!
//! # Role in newsdesk
//! `newsdesk-core` is the input layer. It owns the normalized event types the
//! shell consumes and the pixel geometry the layout engine produces.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (pointer, resize, focus, capture loss).
//! - **Rect / Sides**: pixel-space rectangles for slots, toolbar, and handles.
//! - **logging**: tracing re-exports, or no-op macros when tracing is off.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
