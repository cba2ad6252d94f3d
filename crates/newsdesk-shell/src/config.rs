#![forbid(unsafe_code)]

//! Shell configuration.
//!
//! Captures the shell's tunables as a single [`ShellConfig`] that can be
//! loaded from TOML or JSON at startup. The mode table itself is fixed and
//! not part of the configuration.
//!
//! # Loading
//!
//! ```toml
//! # newsdesk.toml
//! initial_mode = "chat"
//!
//! [metrics]
//! toolbar_height_px = 56.0
//!
//! [columns]
//! three_min_px = 1024.0
//! ```
//!
//! ```rust,ignore
//! let config = ShellConfig::from_toml_file("newsdesk.toml")?;
//! let config = ShellConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! Every field has a default, so an empty document yields
//! `ShellConfig::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use newsdesk_layout::{ColumnBreakpoints, LayoutMetrics, LayoutMode};

/// Top-level shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Mode shown at startup.
    pub initial_mode: LayoutMode,

    /// Pixel metrics for toolbar, single-panel cap, and handles.
    pub metrics: LayoutMetrics,

    /// News grid column thresholds.
    pub columns: ColumnBreakpoints,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_mode: LayoutMode::Home,
            metrics: LayoutMetrics::DEFAULT,
            columns: ColumnBreakpoints::DEFAULT,
        }
    }
}

impl ShellConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ShellConfigError> {
        toml::from_str(s).map_err(ShellConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ShellConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ShellConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ShellConfigError> {
        serde_json::from_str(s).map_err(ShellConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ShellConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ShellConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.metrics.validate();
        errors.extend(self.columns.validate());
        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self, ShellConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ShellConfigError::Validation(errors))
        }
    }
}

/// Errors that can occur when loading a shell configuration.
#[derive(Debug)]
pub enum ShellConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ShellConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ShellConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
