//! Theme transition sequencing
//!
//! A mode flip updates the effective scheme synchronously; what this
//! controller owns is only the UI-visible "switching" window around it.
//! While that window is open the toggle control is inert (re-entrant
//! toggles are dropped, not queued) and entrance/exit animations may run.
//! The window closes after a short settle delay, or immediately when the
//! user asked for reduced motion.
//!
//! The settle deadline is a generation-counted value rather than a bare
//! timer id: replacing or clearing it invalidates any outstanding deadline,
//! so a disposed controller can never settle stale state.

use cadence_core::WidgetId;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default settle window. Short enough to feel instantaneous, long enough
/// for a style-level transition to finish. Not semantically meaningful.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Focus-restoration failures. Always swallowed by the controller.
#[derive(Error, Debug)]
pub enum FocusError {
    #[error("focus restore failed: {0}")]
    Restore(String),
}

/// Seam to the UI focus system. The controller captures the focused widget
/// when a transition starts and offers focus back when it settles.
pub trait FocusAdapter: Send + Sync {
    fn focused(&self) -> Option<WidgetId>;
    fn is_attached(&self, id: WidgetId) -> bool;
    fn restore(&self, id: WidgetId) -> Result<(), FocusError>;
}

/// Adapter for headless runs: no focus to track.
pub struct NullFocusAdapter;

impl FocusAdapter for NullFocusAdapter {
    fn focused(&self) -> Option<WidgetId> {
        None
    }

    fn is_attached(&self, _id: WidgetId) -> bool {
        false
    }

    fn restore(&self, _id: WidgetId) -> Result<(), FocusError> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransitionConfig {
    pub settle_delay: Duration,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Pending settle deadline. Valid only while its generation matches the
/// controller's current one.
#[derive(Clone, Copy, Debug)]
struct SettleHandle {
    deadline: Instant,
    generation: u64,
    focus: Option<WidgetId>,
}

struct Inner {
    transitioning: bool,
    since: Option<Instant>,
    pending: Option<SettleHandle>,
    generation: u64,
}

/// Sequences the switching window around a mode flip.
pub struct TransitionController {
    config: TransitionConfig,
    focus: Box<dyn FocusAdapter>,
    inner: Mutex<Inner>,
}

impl TransitionController {
    pub fn new(config: TransitionConfig, focus: Box<dyn FocusAdapter>) -> Self {
        Self {
            config,
            focus,
            inner: Mutex::new(Inner {
                transitioning: false,
                since: None,
                pending: None,
                generation: 0,
            }),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.inner.lock().unwrap().transitioning
    }

    /// Open the switching window.
    ///
    /// Returns `false` without side effects when a window is already open;
    /// that is the re-entrancy guard against rapid double toggles. With
    /// reduced motion the window opens and settles in the same call, so
    /// callers still get their flip but observers never see a transition.
    pub fn begin(&self, now: Instant, reduced_motion: bool) -> bool {
        let handle = {
            let mut inner = self.inner.lock().unwrap();
            if inner.transitioning {
                tracing::trace!("toggle ignored: transition already in progress");
                return false;
            }
            inner.transitioning = true;
            inner.since = Some(now);
            inner.generation += 1;
            let delay = if reduced_motion {
                Duration::ZERO
            } else {
                self.config.settle_delay
            };
            let handle = SettleHandle {
                deadline: now + delay,
                generation: inner.generation,
                focus: self.focus.focused(),
            };
            inner.pending = Some(handle);
            handle
        };

        if reduced_motion {
            // Zero-delay settle happens inline; no animation frame will come.
            self.settle(handle);
        }
        true
    }

    /// Advance the controller. Returns `true` while a settle is still
    /// pending, so the host knows to keep scheduling frames.
    pub fn tick(&self, now: Instant) -> bool {
        let handle = {
            let inner = self.inner.lock().unwrap();
            match inner.pending {
                Some(handle) if handle.generation == inner.generation => handle,
                _ => return false,
            }
        };
        if now < handle.deadline {
            tracing::trace!(remaining = ?(handle.deadline - now), "transition settling");
            return true;
        }
        self.settle(handle);
        false
    }

    /// Drop any pending settle without side effects. Called on teardown so
    /// a disposed controller never mutates state afterwards.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.pending = None;
        inner.transitioning = false;
        inner.since = None;
    }

    /// How long the current window has been open, if one is open.
    pub fn transitioning_since(&self) -> Option<Instant> {
        self.inner.lock().unwrap().since
    }

    fn settle(&self, handle: SettleHandle) {
        {
            let mut inner = self.inner.lock().unwrap();
            // A clear() or newer toggle invalidated this deadline.
            if handle.generation != inner.generation {
                return;
            }
            inner.transitioning = false;
            inner.since = None;
            inner.pending = None;
        }

        // Best-effort focus restoration, outside the lock.
        if let Some(id) = handle.focus {
            if self.focus.is_attached(id) {
                if let Err(err) = self.focus.restore(id) {
                    tracing::debug!(error = %err, widget = id.raw(), "focus restore failed");
                }
            } else {
                tracing::trace!(widget = id.raw(), "focused widget detached during transition");
            }
        }
    }
}
