//! Scoped pointer listeners
//!
//! Move and release events for a drag must be observed at document level,
//! since the pointer can leave the card mid-drag. A [`PointerSubscription`]
//! represents those listeners. It is acquired when a drag starts and
//! released when it is dropped, so every exit path detaches.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Something that can attach document-level pointer listeners
pub trait PointerHost {
    /// Attach move/up listeners for the lifetime of the returned guard.
    fn attach(&self) -> PointerSubscription;
}

/// Guard for attached pointer listeners. Detaches on drop.
pub struct PointerSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl PointerSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Detach now.
    pub fn release(self) {}
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// Host that keeps a live count of attached listener sets.
///
/// The desktop shell mounts its full-window capture layer whenever the
/// count is non-zero.
#[derive(Clone, Default, Debug)]
pub struct ListenerLedger {
    live: Rc<Cell<usize>>,
}

impl ListenerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listener sets currently attached
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl PointerHost for ListenerLedger {
    fn attach(&self) -> PointerSubscription {
        self.live.set(self.live.get() + 1);
        tracing::trace!(live = self.live.get(), "pointer listeners attached");

        let live = Rc::clone(&self.live);
        PointerSubscription::new(move || {
            live.set(live.get().saturating_sub(1));
            tracing::trace!(live = live.get(), "pointer listeners detached");
        })
    }
}
