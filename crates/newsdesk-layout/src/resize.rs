#![forbid(unsafe_code)]

//! Anchor-based N-panel drag/resize controller.
//!
//! ```text
//! Idle --begin_drag--> Dragging --end_drag / cancel_drag--> Idle
//!                         |  ^
//!                         +--+ update_drag
//! ```
//!
//! A drag captures an anchor (`start_pointer_x`, `start_sizes`). Every
//! update is computed from that anchor, never from the previous update:
//! replaying a pointer position yields the same sizes.
//!
//! Only the two panels adjacent to the dragged handle change, and their
//! combined width is fixed for the whole drag.
//!
//! # Invariants
//!
//! 1. `sum(sizes) == 100` within [`SIZE_EPSILON`].
//! 2. `sizes[i] >= min_sizes[i]` for every panel.
//! 3. `sizes.len() == min_sizes.len()`, fixed for the controller's lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use newsdesk_core::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use newsdesk_core::{debug, trace};

/// Tolerance for the sum-to-100 and minimum-width checks.
pub const SIZE_EPSILON: f64 = 1e-6;

/// Container widths at or below this are treated as "not laid out yet".
pub const MIN_CONTAINER_WIDTH_PX: f64 = 0.5;

/// Pointer position and size snapshot captured at drag start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragAnchor {
    /// Handle between panel `handle_index` and `handle_index + 1`.
    pub handle_index: usize,
    pub start_pointer_x: f64,
    pub start_sizes: Vec<f64>,
}

/// Serializable snapshot of a controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeState {
    pub sizes: Vec<f64>,
    pub drag: Option<DragAnchor>,
}

/// Which side of the dragged handle hit its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragClamp {
    Left,
    Right,
}

/// Explicit no-op diagnostics for updates that leave sizes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    /// Container width is zero or not finite; percentages cannot be derived.
    ContainerWidthUnknown,
    /// Pointer position is not finite.
    InvalidPointer,
}

/// Result of one [`ResizeController::update_drag`] call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Updated {
        handle_index: usize,
        delta_pct: f64,
        clamp: Option<DragClamp>,
    },
    Noop {
        reason: DragNoopReason,
    },
}

/// Runtime state machine distributing width among N ordered panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeController {
    sizes: Vec<f64>,
    min_sizes: Vec<f64>,
    drag: Option<DragAnchor>,
}

impl ResizeController {
    /// Build a controller resting at `initial_sizes`.
    pub fn init(initial_sizes: &[f64], min_sizes: &[f64]) -> Result<Self, ResizeError> {
        if min_sizes.is_empty() {
            return Err(ResizeError::Empty);
        }
        if let Some(index) = min_sizes.iter().position(|m| !m.is_finite() || *m < 0.0) {
            return Err(ResizeError::InvalidMinimum {
                index,
                min: min_sizes[index],
            });
        }
        validate_sizes(initial_sizes, min_sizes)?;
        debug!(
            target: "newsdesk.resize",
            panels = min_sizes.len(),
            sizes = ?initial_sizes,
            "resize controller initialized"
        );
        Ok(Self {
            sizes: initial_sizes.to_vec(),
            min_sizes: min_sizes.to_vec(),
            drag: None,
        })
    }

    /// Live width percentages, one per panel.
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Configured minimum percentages.
    #[must_use]
    pub fn min_sizes(&self) -> &[f64] {
        &self.min_sizes
    }

    /// Panel count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always `false`; controllers hold at least one panel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Number of handles (`len - 1`).
    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.sizes.len().saturating_sub(1)
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active anchor, if dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<&DragAnchor> {
        self.drag.as_ref()
    }

    /// Snapshot of sizes and anchor.
    #[must_use]
    pub fn state(&self) -> ResizeState {
        ResizeState {
            sizes: self.sizes.clone(),
            drag: self.drag.clone(),
        }
    }

    /// Start dragging handle `handle_index` from `pointer_x`.
    pub fn begin_drag(&mut self, handle_index: usize, pointer_x: f64) -> Result<(), ResizeError> {
        if let Some(anchor) = &self.drag {
            return Err(ResizeError::DragAlreadyInProgress {
                handle_index: anchor.handle_index,
            });
        }
        if handle_index >= self.handle_count() {
            return Err(ResizeError::HandleOutOfRange {
                handle_index,
                handle_count: self.handle_count(),
            });
        }
        if !pointer_x.is_finite() {
            return Err(ResizeError::NonFinitePointer);
        }
        self.drag = Some(DragAnchor {
            handle_index,
            start_pointer_x: pointer_x,
            start_sizes: self.sizes.clone(),
        });
        debug!(
            target: "newsdesk.resize",
            handle_index,
            pointer_x,
            "drag started"
        );
        Ok(())
    }

    /// Recompute the pair adjacent to the dragged handle from the anchor.
    ///
    /// O(1): only two entries of `sizes` are written.
    pub fn update_drag(
        &mut self,
        pointer_x: f64,
        container_width_px: f64,
    ) -> Result<DragEffect, ResizeError> {
        let Some(anchor) = &self.drag else {
            return Err(ResizeError::NotDragging);
        };
        if !container_width_px.is_finite() || container_width_px <= MIN_CONTAINER_WIDTH_PX {
            trace!(
                target: "newsdesk.resize",
                container_width_px,
                "drag update skipped: container width unknown"
            );
            return Ok(DragEffect::Noop {
                reason: DragNoopReason::ContainerWidthUnknown,
            });
        }
        if !pointer_x.is_finite() {
            return Ok(DragEffect::Noop {
                reason: DragNoopReason::InvalidPointer,
            });
        }

        let h = anchor.handle_index;
        let delta_pct = (pointer_x - anchor.start_pointer_x) / container_width_px * 100.0;
        let pair = anchor.start_sizes[h] + anchor.start_sizes[h + 1];
        let left_min = self.min_sizes[h];
        let right_min = self.min_sizes[h + 1];

        let mut left = anchor.start_sizes[h] + delta_pct;
        let mut right = pair - left;
        let mut clamp = None;
        if left < left_min {
            left = left_min;
            right = pair - left;
            clamp = Some(DragClamp::Left);
        } else if right < right_min {
            right = right_min;
            left = pair - right;
            clamp = Some(DragClamp::Right);
        }

        self.sizes[h] = left;
        self.sizes[h + 1] = right;

        if clamp.is_some() {
            trace!(
                target: "newsdesk.resize",
                handle_index = h,
                side = ?clamp,
                delta_pct,
                "drag clamped at minimum"
            );
        }
        Ok(DragEffect::Updated {
            handle_index: h,
            delta_pct,
            clamp,
        })
    }

    /// Finish the drag, keeping the current sizes.
    ///
    /// Idempotent: returns `false` without side effects when already idle,
    /// since pointer-up can be delivered more than once.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(anchor) => {
                debug!(
                    target: "newsdesk.resize",
                    handle_index = anchor.handle_index,
                    sizes = ?self.sizes,
                    "drag ended"
                );
                true
            }
            None => {
                trace!(target: "newsdesk.resize", "duplicate drag end ignored");
                false
            }
        }
    }

    /// Strict variant of [`end_drag`](Self::end_drag) for callers that treat
    /// a stray pointer-up as a bug.
    pub fn end_drag_strict(&mut self) -> Result<(), ResizeError> {
        if self.end_drag() {
            Ok(())
        } else {
            Err(ResizeError::NotDragging)
        }
    }

    /// Force-end a drag after lost pointer capture or window blur.
    ///
    /// Sizes stay at the last valid update. Returns `false` when idle.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn cancel_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(anchor) => {
                debug!(
                    target: "newsdesk.resize",
                    handle_index = anchor.handle_index,
                    sizes = ?self.sizes,
                    "drag canceled"
                );
                true
            }
            None => false,
        }
    }

    /// Force sizes back to `initial_sizes` and drop any anchor.
    ///
    /// The panel count is fixed; a different count is rejected rather than
    /// truncated or padded.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn reset(&mut self, initial_sizes: &[f64]) -> Result<(), ResizeError> {
        validate_sizes(initial_sizes, &self.min_sizes)?;
        self.sizes.clear();
        self.sizes.extend_from_slice(initial_sizes);
        if let Some(anchor) = self.drag.take() {
            debug!(
                target: "newsdesk.resize",
                handle_index = anchor.handle_index,
                "reset discarded drag in progress"
            );
        }
        Ok(())
    }

    /// Check invariants 1–3 against the current sizes.
    pub fn check_invariants(&self) -> Result<(), ResizeError> {
        validate_sizes(&self.sizes, &self.min_sizes)
    }
}

fn validate_sizes(sizes: &[f64], min_sizes: &[f64]) -> Result<(), ResizeError> {
    if sizes.len() != min_sizes.len() {
        return Err(ResizeError::SizeCountMismatch {
            expected: min_sizes.len(),
            actual: sizes.len(),
        });
    }
    if let Some(index) = sizes.iter().position(|s| !s.is_finite()) {
        return Err(ResizeError::NonFiniteSize { index });
    }
    for (index, (&size, &min)) in sizes.iter().zip(min_sizes).enumerate() {
        if size < min - SIZE_EPSILON {
            return Err(ResizeError::BelowMinimum { index, size, min });
        }
    }
    let sum: f64 = sizes.iter().sum();
    if (sum - 100.0).abs() > SIZE_EPSILON {
        return Err(ResizeError::SumMismatch { sum });
    }
    Ok(())
}

/// Controller construction and lifecycle errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeError {
    Empty,
    SizeCountMismatch { expected: usize, actual: usize },
    NonFiniteSize { index: usize },
    InvalidMinimum { index: usize, min: f64 },
    BelowMinimum { index: usize, size: f64, min: f64 },
    SumMismatch { sum: f64 },
    HandleOutOfRange {
        handle_index: usize,
        handle_count: usize,
    },
    NonFinitePointer,
    DragAlreadyInProgress { handle_index: usize },
    NotDragging,
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "resize controller needs at least one panel"),
            Self::SizeCountMismatch { expected, actual } => {
                write!(f, "expected {expected} sizes, got {actual}")
            }
            Self::NonFiniteSize { index } => write!(f, "size {index} is not finite"),
            Self::InvalidMinimum { index, min } => {
                write!(f, "minimum {index} must be finite and >= 0 (got {min})")
            }
            Self::BelowMinimum { index, size, min } => {
                write!(f, "size {index} is {size}%, below its {min}% minimum")
            }
            Self::SumMismatch { sum } => write!(f, "sizes sum to {sum}%, expected 100%"),
            Self::HandleOutOfRange {
                handle_index,
                handle_count,
            } => write!(
                f,
                "handle {handle_index} out of range ({handle_count} handle(s))"
            ),
            Self::NonFinitePointer => write!(f, "pointer position is not finite"),
            Self::DragAlreadyInProgress { handle_index } => write!(
                f,
                "drag already in progress on handle {handle_index} (missed pointer-up?)"
            ),
            Self::NotDragging => write!(f, "no drag in progress"),
        }
    }
}

impl std::error::Error for ResizeError {}
