//! Client-readiness signal.
//!
//! A component instance reads the signal on every render. While it is not
//! ready, a read queues a one-shot post-commit effect unless one is already
//! pending. When that effect runs (only in a browser environment) the signal
//! latches to `true` and the owning root is invalidated so the next pass
//! observes it. An effect dropped without running (server passes, failed
//! hydration) releases the slot for the next pass. The signal never resets.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::{Invalidator, RenderContext};

#[derive(Debug, Default)]
struct ReadinessState {
    ready: Cell<bool>,
    scheduled: Cell<bool>,
}

impl ReadinessState {
    fn latch(&self) -> bool {
        if self.ready.get() {
            return false;
        }
        self.ready.set(true);
        debug!("client readiness latched");
        true
    }
}

/// Mount effect owned by the commit queue.
struct PendingMount {
    state: Rc<ReadinessState>,
    invalidator: Invalidator,
}

impl PendingMount {
    fn run(&self) {
        if self.state.latch() {
            self.invalidator.invalidate();
        }
    }
}

impl Drop for PendingMount {
    fn drop(&mut self) {
        self.state.scheduled.set(false);
    }
}

/// Per-instance flag that turns `true` once, after the first browser mount.
///
/// The state is owned by the instance; separate instances never share it.
///
/// # Examples
/// ```
/// use frontend::hydration::ClientReadiness;
///
/// let readiness = ClientReadiness::new();
/// assert!(!readiness.is_ready());
/// assert!(readiness.mark_mounted());
/// assert!(!readiness.mark_mounted());
/// assert!(readiness.is_ready());
/// ```
#[derive(Debug, Default)]
pub struct ClientReadiness {
    state: Rc<ReadinessState>,
}

impl ClientReadiness {
    /// New signal, not ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value without scheduling anything.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.ready.get()
    }

    /// Read the signal during render.
    ///
    /// Returns the current value. While not ready, and with no mount effect
    /// pending, a post-commit effect is queued that latches the signal the
    /// way [`Self::mark_mounted`] does and requests a re-render if the value
    /// changed.
    pub fn observe(&self, cx: &mut RenderContext) -> bool {
        if !self.is_ready() && !self.state.scheduled.replace(true) {
            let pending = PendingMount {
                state: Rc::clone(&self.state),
                invalidator: cx.invalidator(),
            };
            cx.on_commit(move || pending.run());
        }
        self.is_ready()
    }

    /// Record that the owning instance has mounted.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mark_mounted(&self) -> bool {
        self.state.latch()
    }
}
