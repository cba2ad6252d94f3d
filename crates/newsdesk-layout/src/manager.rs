#![forbid(unsafe_code)]

//! Mode-driven layout orchestration.
//!
//! [`LayoutManager`] resolves the [`LayoutConfig`] for the active mode, owns
//! the [`ResizeController`] for resizable shapes, and turns everything into a
//! [`LayoutFrame`]: toolbar region, one [`PanelSlot`] per configured panel,
//! and one [`HandleRegion`] per draggable divider.
//!
//! # Invariants
//!
//! 1. A mode switch always leaves sizes at the new mode's initial widths.
//! 2. The controller's panel count equals the active config's panel count;
//!    a count change recreates the controller, never patches it.
//! 3. Only drag events on engine-rendered handles write sizes.
//!
//! # Failure Modes
//!
//! - Sizes/panel-count mismatch at frame time panics (a missed reset).
//! - Drags on non-resizable modes return [`LayoutError::NotResizable`].
//! - Content lists that do not line up with the config are rejected by
//!   [`LayoutFrame::fill`].

use std::fmt;

use newsdesk_core::geometry::{Rect, Sides};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use newsdesk_core::logging::{debug, error, warn};
#[cfg(not(feature = "tracing"))]
use newsdesk_core::{debug, error, warn};

use crate::config::{LayoutConfig, LayoutConfigRegistry};
use crate::mode::{LayoutMode, PanelKind, Shape};
use crate::observer::ContainerWidthObserver;
use crate::resize::{DragEffect, ResizeController, ResizeError};

/// Toolbar height.
pub const TOOLBAR_HEIGHT_PX: f64 = 64.0;
/// Maximum content width of the `Single` shape.
pub const SINGLE_MAX_CONTENT_PX: f64 = 1280.0;
/// Horizontal padding around the `Single` shape's content.
pub const SINGLE_GUTTER_PX: f64 = 16.0;
/// Visible width of a drag handle.
pub const HANDLE_WIDTH_PX: f64 = 4.0;
/// Extra hit area on each side of a handle.
pub const HANDLE_HIT_SLOP_PX: f64 = 6.0;

/// Pixel metrics used when building a [`LayoutFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub toolbar_height_px: f64,
    pub single_max_content_px: f64,
    pub single_gutter_px: f64,
    pub handle_width_px: f64,
    pub handle_hit_slop_px: f64,
}

impl LayoutMetrics {
    pub const DEFAULT: Self = Self {
        toolbar_height_px: TOOLBAR_HEIGHT_PX,
        single_max_content_px: SINGLE_MAX_CONTENT_PX,
        single_gutter_px: SINGLE_GUTTER_PX,
        handle_width_px: HANDLE_WIDTH_PX,
        handle_hit_slop_px: HANDLE_HIT_SLOP_PX,
    };

    /// Validate metric ranges, returning one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let fields = [
            ("toolbar_height_px", self.toolbar_height_px),
            ("single_max_content_px", self.single_max_content_px),
            ("single_gutter_px", self.single_gutter_px),
            ("handle_width_px", self.handle_width_px),
            ("handle_hit_slop_px", self.handle_hit_slop_px),
        ];
        let mut errors: Vec<String> = fields
            .iter()
            .filter(|(_, v)| !v.is_finite() || *v < 0.0)
            .map(|(name, v)| format!("metrics: {name} must be finite and >= 0 (got {v})"))
            .collect();
        if self.single_max_content_px == 0.0 {
            errors.push("metrics: single_max_content_px must be > 0".to_owned());
        }
        errors
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a slot hands to external content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelSlot {
    pub key: &'static str,
    pub kind: PanelKind,
    pub index: usize,
    pub rect: Rect,
    /// Share of the panel region, in percent.
    pub width_pct: f64,
    /// Actual pixel width; `None` until a non-zero container width has been
    /// observed.
    pub width_px: Option<f64>,
    /// Stacking order; only meaningful for `Overlay`.
    pub z_index: usize,
}

/// A draggable divider between panel `index` and `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleRegion {
    pub index: usize,
    pub rect: Rect,
    /// `rect` widened by the hit slop.
    pub hit_rect: Rect,
    /// Whether this handle is being dragged.
    pub active: bool,
}

/// One rendered layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutFrame {
    pub mode: LayoutMode,
    pub shape: Shape,
    pub toolbar: Option<Rect>,
    pub panel_region: Rect,
    pub slots: Vec<PanelSlot>,
    pub handles: Vec<HandleRegion>,
}

impl LayoutFrame {
    /// Slot for panel `key`.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&PanelSlot> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Handle whose hit area contains `(x, y)`. The nearest handle wins when
    /// hit areas overlap.
    #[must_use]
    pub fn handle_at(&self, x: f64, y: f64) -> Option<usize> {
        self.handles
            .iter()
            .filter(|h| h.hit_rect.contains(x, y))
            .min_by(|a, b| {
                let da = (a.rect.center_x() - x).abs();
                let db = (b.rect.center_x() - x).abs();
                da.total_cmp(&db)
            })
            .map(|h| h.index)
    }

    /// Pair externally supplied content with slots, in config order.
    pub fn fill<C: PanelContent>(self, contents: Vec<C>) -> Result<Vec<FilledSlot<C>>, LayoutError> {
        if contents.len() != self.slots.len() {
            return Err(LayoutError::ContentCountMismatch {
                mode: self.mode,
                expected: self.slots.len(),
                actual: contents.len(),
            });
        }
        if let Some((slot, content)) = self
            .slots
            .iter()
            .zip(&contents)
            .find(|(slot, content)| slot.kind != content.kind())
        {
            return Err(LayoutError::ContentKindMismatch {
                key: slot.key,
                expected: slot.kind,
                actual: content.kind(),
            });
        }
        Ok(self
            .slots
            .into_iter()
            .zip(contents)
            .map(|(slot, content)| FilledSlot { slot, content })
            .collect())
    }
}

/// Externally rendered panel content.
pub trait PanelContent {
    /// The kind of panel this content is built for.
    fn kind(&self) -> PanelKind;
}

impl PanelContent for PanelKind {
    fn kind(&self) -> PanelKind {
        *self
    }
}

/// A slot paired with its content.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledSlot<C> {
    pub slot: PanelSlot,
    pub content: C,
}

/// Owns the active config and the resize controller for it.
#[derive(Debug)]
pub struct LayoutManager {
    config: &'static LayoutConfig,
    controller: Option<ResizeController>,
    fixed_sizes: Vec<f64>,
    observer: ContainerWidthObserver,
    metrics: LayoutMetrics,
}

impl LayoutManager {
    /// Manager for `mode` with default metrics.
    #[must_use]
    pub fn new(mode: LayoutMode) -> Self {
        Self::with_metrics(mode, LayoutMetrics::DEFAULT)
    }

    /// Manager for `mode` with explicit metrics.
    #[must_use]
    pub fn with_metrics(mode: LayoutMode, metrics: LayoutMetrics) -> Self {
        let config = LayoutConfigRegistry::resolve(mode);
        Self {
            config,
            controller: build_controller(config),
            fixed_sizes: config.initial_sizes(),
            observer: ContainerWidthObserver::new(),
            metrics,
        }
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.config.mode
    }

    #[must_use]
    pub fn config(&self) -> &'static LayoutConfig {
        self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// The resize controller, present only for resizable configs.
    #[must_use]
    pub fn controller(&self) -> Option<&ResizeController> {
        self.controller.as_ref()
    }

    /// Width observer for the layout root.
    #[must_use]
    pub fn observer(&self) -> &ContainerWidthObserver {
        &self.observer
    }

    /// Current panel widths in percent.
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        match &self.controller {
            Some(controller) => controller.sizes(),
            None => &self.fixed_sizes,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.as_ref().is_some_and(ResizeController::is_dragging)
    }

    /// Activate `mode`, resetting sizes to its initial widths.
    ///
    /// Any drag in progress is discarded. A controller is reused only when
    /// the panel count and minimums match; otherwise it is recreated.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn set_mode(&mut self, mode: LayoutMode) {
        let from = self.config.mode;
        let config = LayoutConfigRegistry::resolve(mode);
        self.config = config;
        self.fixed_sizes = config.initial_sizes();

        self.controller = if config.resizable {
            match self.controller.take() {
                Some(mut controller)
                    if controller.len() == config.panel_count()
                        && controller.min_sizes() == config.min_sizes().as_slice() =>
                {
                    match controller.reset(&self.fixed_sizes) {
                        Ok(()) => Some(controller),
                        Err(err) => {
                            error!(target: "newsdesk.layout", %err, "controller reset failed");
                            build_controller(config)
                        }
                    }
                }
                _ => build_controller(config),
            }
        } else {
            None
        };

        debug!(
            target: "newsdesk.layout",
            from = %from,
            to = %mode,
            panels = config.panel_count(),
            resizable = config.resizable,
            "layout mode switched"
        );
    }

    /// Record the layout root's pixel width.
    pub fn observe_width(&self, width_px: f64) -> bool {
        self.observer.observe(width_px)
    }

    /// Pointer pressed on handle `handle_index`.
    pub fn handle_pointer_down(
        &mut self,
        handle_index: usize,
        pointer_x: f64,
    ) -> Result<(), LayoutError> {
        let mode = self.config.mode;
        let controller = self
            .controller
            .as_mut()
            .ok_or(LayoutError::NotResizable { mode })?;
        controller.begin_drag(handle_index, pointer_x).map_err(|err| {
            warn!(target: "newsdesk.layout", %err, "drag start rejected");
            LayoutError::Resize(err)
        })
    }

    /// Pointer moved during a drag; width comes from the observer.
    pub fn handle_pointer_move(&mut self, pointer_x: f64) -> Result<DragEffect, LayoutError> {
        let width = self.observer.raw_width();
        self.handle_pointer_move_in(pointer_x, width)
    }

    /// Pointer moved during a drag inside a container of known width.
    pub fn handle_pointer_move_in(
        &mut self,
        pointer_x: f64,
        container_width_px: f64,
    ) -> Result<DragEffect, LayoutError> {
        let mode = self.config.mode;
        let controller = self
            .controller
            .as_mut()
            .ok_or(LayoutError::NotResizable { mode })?;
        controller
            .update_drag(pointer_x, container_width_px)
            .map_err(LayoutError::Resize)
    }

    /// Pointer released. Idempotent; returns whether a drag ended.
    pub fn handle_pointer_up(&mut self) -> bool {
        self.controller.as_mut().is_some_and(ResizeController::end_drag)
    }

    /// Pointer capture lost or window blurred; ends any drag at its last
    /// valid sizes.
    pub fn handle_capture_lost(&mut self) -> bool {
        let canceled = self
            .controller
            .as_mut()
            .is_some_and(ResizeController::cancel_drag);
        if canceled {
            warn!(target: "newsdesk.layout", mode = %self.config.mode, "drag force-ended after capture loss");
        }
        canceled
    }

    /// Lay out the active config inside `area`.
    ///
    /// # Panics
    ///
    /// Panics when the size array does not match the config's panel count.
    #[must_use]
    pub fn frame(&self, area: Rect) -> LayoutFrame {
        let active = self
            .controller
            .as_ref()
            .and_then(ResizeController::anchor)
            .map(|a| a.handle_index);
        compose(
            self.config,
            self.sizes(),
            active,
            &self.metrics,
            self.observer.width().is_some(),
            area,
        )
    }

    /// Handle under `(x, y)` when laid out inside `area`.
    #[must_use]
    pub fn hit_test_handle(&self, area: Rect, x: f64, y: f64) -> Option<usize> {
        self.frame(area).handle_at(x, y)
    }

    /// [`frame`](Self::frame) paired with one content item per panel.
    pub fn frame_with<C: PanelContent>(
        &self,
        area: Rect,
        contents: Vec<C>,
    ) -> Result<Vec<FilledSlot<C>>, LayoutError> {
        self.frame(area).fill(contents)
    }
}

fn compose(
    config: &LayoutConfig,
    sizes: &[f64],
    active: Option<usize>,
    metrics: &LayoutMetrics,
    width_known: bool,
    area: Rect,
) -> LayoutFrame {
    assert_eq!(
        sizes.len(),
        config.panel_count(),
        "layout sizes out of sync with mode {}: missed reset on shape change",
        config.mode
    );

    let (toolbar, panel_region) = if config.has_toolbar {
        let (toolbar, rest) = area.split_top(metrics.toolbar_height_px);
        (Some(toolbar), rest)
    } else {
        (None, area)
    };
    let px = |w: f64| width_known.then_some(w);

    let mut slots = Vec::with_capacity(config.panel_count());
    let mut handles = Vec::with_capacity(config.handle_count());

    match config.shape {
        Shape::Single => {
            let inner = panel_region.inner(Sides::horizontal(metrics.single_gutter_px));
            let width = inner.width.min(metrics.single_max_content_px);
            let rect = Rect::new(inner.center_x() - width / 2.0, inner.y, width, inner.height);
            let panel = &config.panels[0];
            slots.push(PanelSlot {
                key: panel.key,
                kind: panel.kind,
                index: 0,
                rect,
                width_pct: 100.0,
                width_px: px(rect.width),
                z_index: 0,
            });
        }
        Shape::Overlay => {
            for (index, panel) in config.panels.iter().enumerate() {
                slots.push(PanelSlot {
                    key: panel.key,
                    kind: panel.kind,
                    index,
                    rect: panel_region,
                    width_pct: sizes[index],
                    width_px: px(panel_region.width),
                    z_index: index,
                });
            }
        }
        Shape::Horizontal => {
            let handle_count = if config.resizable {
                config.handle_count()
            } else {
                0
            };
            let handle_width = metrics
                .handle_width_px
                .min(panel_region.width / (handle_count.max(1) as f64));
            let available = (panel_region.width - handle_width * handle_count as f64).max(0.0);

            let mut x = panel_region.x;
            for (index, panel) in config.panels.iter().enumerate() {
                let width = available * sizes[index] / 100.0;
                let rect = Rect::new(x, panel_region.y, width, panel_region.height);
                slots.push(PanelSlot {
                    key: panel.key,
                    kind: panel.kind,
                    index,
                    rect,
                    width_pct: sizes[index],
                    width_px: px(width),
                    z_index: 0,
                });
                x += width;

                if index < handle_count {
                    let rect = Rect::new(x, panel_region.y, handle_width, panel_region.height);
                    handles.push(HandleRegion {
                        index,
                        rect,
                        hit_rect: rect.expand_x(metrics.handle_hit_slop_px),
                        active: active == Some(index),
                    });
                    x += handle_width;
                }
            }
        }
    }

    LayoutFrame {
        mode: config.mode,
        shape: config.shape,
        toolbar,
        panel_region,
        slots,
        handles,
    }
}

fn build_controller(config: &LayoutConfig) -> Option<ResizeController> {
    if !config.resizable {
        return None;
    }
    match ResizeController::init(&config.initial_sizes(), &config.min_sizes()) {
        Ok(controller) => Some(controller),
        Err(err) => {
            error!(target: "newsdesk.layout", mode = %config.mode, %err, "invalid layout table entry");
            debug_assert!(false, "invalid layout table entry for {}: {err}", config.mode);
            None
        }
    }
}

/// Layout orchestration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A drag was attempted on a mode without handles.
    NotResizable { mode: LayoutMode },
    /// The resize controller rejected a lifecycle step.
    Resize(ResizeError),
    /// Content list length does not match the config.
    ContentCountMismatch {
        mode: LayoutMode,
        expected: usize,
        actual: usize,
    },
    /// Content kind does not match the slot it lands in.
    ContentKindMismatch {
        key: &'static str,
        expected: PanelKind,
        actual: PanelKind,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotResizable { mode } => write!(f, "mode {mode} is not resizable"),
            Self::Resize(err) => write!(f, "resize: {err}"),
            Self::ContentCountMismatch {
                mode,
                expected,
                actual,
            } => write!(
                f,
                "mode {mode} has {expected} panel(s) but {actual} content item(s) were supplied"
            ),
            Self::ContentKindMismatch {
                key,
                expected,
                actual,
            } => write!(
                f,
                "panel {key:?} expects {expected:?} content, got {actual:?}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Resize(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<ResizeError> for LayoutError {
    fn from(err: ResizeError) -> Self {
        Self::Resize(err)
    }
}
