#![forbid(unsafe_code)]

//! Newsdesk error model and local recovery.
//!
//! # Design Principles
//!
//! 1. **Domain-specific errors**: each crate owns a typed error so callers
//!    can match on what matters and let the rest propagate.
//! 2. **Local recovery**: every variant maps to a [`RecoveryAction`]; none of
//!    them requires tearing the UI down.
//! 3. **Observability**: [`Error::error_type`] gives a stable label for log
//!    fields without the error types depending on tracing.

use std::fmt;

use newsdesk_layout::{LayoutError, ResizeError, UnknownLayoutMode};
#[cfg(feature = "shell")]
use newsdesk_shell::ShellConfigError;

/// Top-level error type for newsdesk hosts.
#[derive(Debug)]
pub enum Error {
    /// The resize controller rejected a lifecycle step or size array.
    Resize(ResizeError),
    /// Layout orchestration failure.
    Layout(LayoutError),
    /// A mode name from user input did not parse.
    UnknownMode(UnknownLayoutMode),
    /// Configuration could not be loaded or failed validation.
    #[cfg(feature = "shell")]
    Config(ShellConfigError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for newsdesk APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// What the host should do when an error occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Drop the input event; sizes stay at their last valid values.
    DropInput,
    /// Keep showing the previous frame.
    KeepPreviousFrame,
    /// Fall back to default configuration or the default mode.
    UseDefaults,
}

fn resize_recovery(err: &ResizeError) -> RecoveryAction {
    match err {
        ResizeError::HandleOutOfRange { .. }
        | ResizeError::NonFinitePointer
        | ResizeError::DragAlreadyInProgress { .. }
        | ResizeError::NotDragging => RecoveryAction::DropInput,
        ResizeError::Empty
        | ResizeError::SizeCountMismatch { .. }
        | ResizeError::NonFiniteSize { .. }
        | ResizeError::InvalidMinimum { .. }
        | ResizeError::BelowMinimum { .. }
        | ResizeError::SumMismatch { .. } => RecoveryAction::KeepPreviousFrame,
    }
}

impl Error {
    /// Determine the recovery action for this error.
    pub fn recovery(&self) -> RecoveryAction {
        match self {
            Self::Resize(err) => resize_recovery(err),
            Self::Layout(LayoutError::Resize(err)) => resize_recovery(err),
            Self::Layout(LayoutError::NotResizable { .. }) => RecoveryAction::DropInput,
            Self::Layout(
                LayoutError::ContentCountMismatch { .. } | LayoutError::ContentKindMismatch { .. },
            ) => RecoveryAction::KeepPreviousFrame,
            Self::UnknownMode(_) => RecoveryAction::UseDefaults,
            #[cfg(feature = "shell")]
            Self::Config(_) => RecoveryAction::UseDefaults,
            Self::Io(_) => RecoveryAction::UseDefaults,
        }
    }

    /// Error type label for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Resize(_) => "resize",
            Self::Layout(_) => "layout",
            Self::UnknownMode(_) => "unknown_mode",
            #[cfg(feature = "shell")]
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resize(err) => write!(f, "{err}"),
            Self::Layout(err) => write!(f, "{err}"),
            Self::UnknownMode(err) => write!(f, "{err}"),
            #[cfg(feature = "shell")]
            Self::Config(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resize(err) => Some(err),
            Self::Layout(err) => Some(err),
            Self::UnknownMode(err) => Some(err),
            #[cfg(feature = "shell")]
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DropInput => write!(f, "drop_input"),
            Self::KeepPreviousFrame => write!(f, "keep_previous_frame"),
            Self::UseDefaults => write!(f, "use_defaults"),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<ResizeError> for Error {
    fn from(err: ResizeError) -> Self {
        Self::Resize(err)
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<UnknownLayoutMode> for Error {
    fn from(err: UnknownLayoutMode) -> Self {
        Self::UnknownMode(err)
    }
}

#[cfg(feature = "shell")]
impl From<ShellConfigError> for Error {
    fn from(err: ShellConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
