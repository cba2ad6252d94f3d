#![forbid(unsafe_code)]

//! Container width publication for panel content.
//!
//! Panel content makes its own responsive decisions (e.g. a news grid picking
//! one, two, or three columns) from the *pixel* width of the layout root, not
//! just its percentage share: 30% of 2000 px is a different panel than 30% of
//! 800 px.
//!
//! # Delivery model
//!
//! - [`ContainerWidthObserver::subscribe`] queues an initial notification
//!   carrying the current width.
//! - [`ContainerWidthObserver::observe`] records a new width and queues a
//!   notification for every subscriber when the width changed.
//! - [`ContainerWidthObserver::flush`] delivers queued notifications. The host
//!   calls it after layout has settled, so callbacks never run from inside a
//!   render or from inside `subscribe`/`observe`.
//!
//! Callbacks may subscribe or unsubscribe (including themselves) while a
//! flush is running.
//!
//! Single-threaded: the observer lives on the UI thread and is shared through
//! cheap `Rc` clones.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[cfg(feature = "tracing")]
use newsdesk_core::logging::trace;
#[cfg(not(feature = "tracing"))]
use newsdesk_core::trace;

use crate::resize::MIN_CONTAINER_WIDTH_PX;

/// A unique identifier for a width subscription.
pub type SubId = u64;

type WidthCallback = Box<dyn FnMut(f64)>;

struct Subscriber {
    id: SubId,
    callback: WidthCallback,
    pending: bool,
}

#[derive(Default)]
struct Inner {
    width_px: f64,
    subscribers: Vec<Subscriber>,
    next_id: SubId,
    flushing: bool,
    removed_during_flush: Vec<SubId>,
}

/// Publishes the layout root's pixel width to subscribers.
#[derive(Clone, Default)]
pub struct ContainerWidthObserver {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for ContainerWidthObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ContainerWidthObserver")
            .field("width_px", &inner.width_px)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl ContainerWidthObserver {
    /// Create an observer with no width observed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last observed width, or `None` before the first non-zero layout pass.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        usable_width(self.inner.borrow().width_px)
    }

    /// Raw last observed width (may be zero).
    #[must_use]
    pub fn raw_width(&self) -> f64 {
        self.inner.borrow().width_px
    }

    /// Convert a percentage share into pixels, if the width is known.
    #[must_use]
    pub fn to_px(&self, width_pct: f64) -> Option<f64> {
        self.width().map(|w| w * width_pct / 100.0)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Whether any notification is waiting for [`flush`](Self::flush).
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.inner.borrow().subscribers.iter().any(|s| s.pending)
    }

    /// Register `callback`; it first fires with the current width on the next
    /// flush, then on every observed width change.
    pub fn subscribe(&self, callback: impl FnMut(f64) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
            pending: true,
        });
        trace!(target: "newsdesk.layout", sub_id = id, "width subscription started");
        Subscription {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Record the root's current pixel width.
    ///
    /// Returns `true` when the width changed and notifications were queued.
    pub fn observe(&self, width_px: f64) -> bool {
        let width_px = if width_px.is_finite() {
            width_px.max(0.0)
        } else {
            0.0
        };
        let mut inner = self.inner.borrow_mut();
        if inner.width_px == width_px {
            return false;
        }
        inner.width_px = width_px;
        for sub in &mut inner.subscribers {
            sub.pending = true;
        }
        trace!(target: "newsdesk.layout", width_px, "container width observed");
        true
    }

    /// Deliver queued notifications. Returns how many callbacks ran.
    pub fn flush(&self) -> usize {
        let (mut taken, width_px) = {
            let mut inner = self.inner.borrow_mut();
            if inner.flushing {
                return 0;
            }
            inner.flushing = true;
            (std::mem::take(&mut inner.subscribers), inner.width_px)
        };

        let mut delivered = 0;
        for sub in &mut taken {
            if !sub.pending {
                continue;
            }
            if self
                .inner
                .borrow()
                .removed_during_flush
                .contains(&sub.id)
            {
                continue;
            }
            sub.pending = false;
            (sub.callback)(width_px);
            delivered += 1;
        }

        let mut inner = self.inner.borrow_mut();
        let removed = std::mem::take(&mut inner.removed_during_flush);
        taken.retain(|s| !removed.contains(&s.id));
        // Subscribers added by callbacks land after the existing ones.
        let added = std::mem::take(&mut inner.subscribers);
        taken.extend(added);
        inner.subscribers = taken;
        inner.flushing = false;
        delivered
    }
}

fn usable_width(width_px: f64) -> Option<f64> {
    (width_px.is_finite() && width_px > MIN_CONTAINER_WIDTH_PX).then_some(width_px)
}

fn remove_subscriber(inner: &RefCell<Inner>, id: SubId) {
    let mut inner = inner.borrow_mut();
    let before = inner.subscribers.len();
    inner.subscribers.retain(|s| s.id != id);
    if inner.subscribers.len() == before && inner.flushing {
        inner.removed_during_flush.push(id);
    }
    trace!(target: "newsdesk.layout", sub_id = id, "width subscription stopped");
}

/// RAII handle for a width subscription; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubId,
    inner: Weak<RefCell<Inner>>,
}

impl Subscription {
    /// Identifier of this subscription.
    #[must_use]
    pub fn id(&self) -> SubId {
        self.id
    }

    /// Unsubscribe now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            remove_subscriber(&inner, self.id);
        }
    }
}
