//! System color-scheme and motion signals
//!
//! Wraps the environment's "media query" equivalents behind an explicit
//! subscribe/unsubscribe interface. Hosts without any usable signal API get
//! a fixed default and no-op subscriptions, so callers never branch on
//! platform support.

use crate::theme::ColorScheme;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

/// Environment-derived display hints. Read-only from the app's point of
/// view; refreshed on change notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemSignal {
    pub color_scheme: ColorScheme,
    pub reduced_motion: bool,
}

impl SystemSignal {
    /// What we assume when the platform cannot tell us anything.
    pub const FALLBACK: SystemSignal = SystemSignal {
        color_scheme: ColorScheme::Light,
        reduced_motion: false,
    };
}

impl Default for SystemSignal {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Seam over the platform query. `None` means the environment has no
/// signal API at all (headless runs, old desktops).
pub trait SignalSource: Send + Sync {
    fn query(&self) -> Option<SystemSignal>;
}

/// Source for environments with no signal support.
pub struct UnsupportedSource;

impl SignalSource for UnsupportedSource {
    fn query(&self) -> Option<SystemSignal> {
        None
    }
}

new_key_type! {
    /// Handle for a registered listener pair
    pub struct ListenerKey;
}

type SchemeListener = Box<dyn FnMut(ColorScheme) + Send>;
type MotionListener = Box<dyn FnMut(bool) + Send>;

struct Listener {
    on_scheme: SchemeListener,
    on_motion: MotionListener,
}

struct WatcherInner {
    listeners: SlotMap<ListenerKey, Arc<Mutex<Listener>>>,
    last: SystemSignal,
}

/// Watches the OS color-scheme and reduced-motion signals.
///
/// Change detection is pull-based: the host calls [`refresh`] on its poll
/// cadence (or from a native notification hook) and listeners fire only
/// when the queried value actually changed.
///
/// [`refresh`]: SystemPreferenceWatcher::refresh
pub struct SystemPreferenceWatcher {
    source: Box<dyn SignalSource>,
    supported: bool,
    inner: Mutex<WatcherInner>,
}

impl SystemPreferenceWatcher {
    pub fn new(source: Box<dyn SignalSource>) -> Arc<Self> {
        let initial = source.query();
        let supported = initial.is_some();
        if !supported {
            tracing::debug!("system signal API unavailable, using fixed defaults");
        }
        Arc::new(Self {
            source,
            supported,
            inner: Mutex::new(WatcherInner {
                listeners: SlotMap::with_key(),
                last: initial.unwrap_or(SystemSignal::FALLBACK),
            }),
        })
    }

    /// Watcher for an environment with no signal API.
    pub fn unsupported() -> Arc<Self> {
        Self::new(Box::new(UnsupportedSource))
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// The last observed signal (the fallback when unsupported).
    pub fn current(&self) -> SystemSignal {
        self.inner.lock().unwrap().last
    }

    /// Register listeners for scheme and motion changes.
    ///
    /// Both listeners share one registration; dropping (or explicitly
    /// unsubscribing) the returned [`Subscription`] removes both. On an
    /// unsupported host nothing is registered, but the subscription is
    /// still a valid no-op disposer.
    pub fn subscribe(
        self: &Arc<Self>,
        on_scheme: impl FnMut(ColorScheme) + Send + 'static,
        on_motion: impl FnMut(bool) + Send + 'static,
    ) -> Subscription {
        if !self.supported {
            return Subscription {
                watcher: Weak::new(),
                key: None,
            };
        }
        let key = self
            .inner
            .lock()
            .unwrap()
            .listeners
            .insert(Arc::new(Mutex::new(Listener {
                on_scheme: Box::new(on_scheme),
                on_motion: Box::new(on_motion),
            })));
        Subscription {
            watcher: Arc::downgrade(self),
            key: Some(key),
        }
    }

    /// Re-query the platform and notify listeners about deltas.
    ///
    /// Returns the signal now in effect. No-op (beyond returning the
    /// fallback) on unsupported hosts.
    pub fn refresh(&self) -> SystemSignal {
        let Some(signal) = self.source.query() else {
            return self.current();
        };

        // Callbacks run outside the watcher lock so a listener may re-enter
        // (query `current`, drop its own `Subscription`) without deadlocking.
        let (targets, scheme_changed, motion_changed) = {
            let mut inner = self.inner.lock().unwrap();
            let previous = inner.last;
            if signal == previous {
                return signal;
            }
            inner.last = signal;
            tracing::debug!(
                scheme = %signal.color_scheme,
                reduced_motion = signal.reduced_motion,
                "system signal changed"
            );
            (
                inner.listeners.values().cloned().collect::<Vec<_>>(),
                signal.color_scheme != previous.color_scheme,
                signal.reduced_motion != previous.reduced_motion,
            )
        };

        for listener in targets {
            let mut listener = listener.lock().unwrap();
            if scheme_changed {
                (listener.on_scheme)(signal.color_scheme);
            }
            if motion_changed {
                (listener.on_motion)(signal.reduced_motion);
            }
        }
        signal
    }

    fn remove(&self, key: ListenerKey) {
        self.inner.lock().unwrap().listeners.remove(key);
    }
}

/// Disposer handle for a watcher registration. Unsubscribes on drop.
pub struct Subscription {
    watcher: Weak<SystemPreferenceWatcher>,
    key: Option<ListenerKey>,
}

impl Subscription {
    /// Remove both listeners. Safe to call on a no-op subscription.
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let (Some(watcher), Some(key)) = (self.watcher.upgrade(), self.key.take()) {
            watcher.remove(key);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        signal: Mutex<SystemSignal>,
    }

    impl FakeSource {
        fn shared(initial: SystemSignal) -> Arc<Self> {
            Arc::new(Self {
                signal: Mutex::new(initial),
            })
        }

        fn set(&self, signal: SystemSignal) {
            *self.signal.lock().unwrap() = signal;
        }
    }

    impl SignalSource for Arc<FakeSource> {
        fn query(&self) -> Option<SystemSignal> {
            Some(*self.signal.lock().unwrap())
        }
    }

    #[test]
    fn unsupported_host_reports_fallback_and_noop_subscribe() {
        let watcher = SystemPreferenceWatcher::unsupported();
        assert!(!watcher.is_supported());
        assert_eq!(watcher.current(), SystemSignal::FALLBACK);

        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in = fired.clone();
        let sub = watcher.subscribe(move |_| {
            fired_in.fetch_add(1, Ordering::SeqCst);
        }, |_| {});
        watcher.refresh();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        // Still a valid disposer.
        sub.unsubscribe();
    }

    #[test]
    fn refresh_fires_only_on_delta() {
        let source = FakeSource::shared(SystemSignal::FALLBACK);
        let watcher = SystemPreferenceWatcher::new(Box::new(source.clone()));

        let scheme_fired = Arc::new(AtomicUsize::new(0));
        let motion_fired = Arc::new(AtomicUsize::new(0));
        let s = scheme_fired.clone();
        let m = motion_fired.clone();
        let _sub = watcher.subscribe(
            move |_| {
                s.fetch_add(1, Ordering::SeqCst);
            },
            move |_| {
                m.fetch_add(1, Ordering::SeqCst);
            },
        );

        // Unchanged signal: nothing fires.
        watcher.refresh();
        assert_eq!(scheme_fired.load(Ordering::SeqCst), 0);

        // Scheme flip fires the scheme listener only.
        source.set(SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: false,
        });
        watcher.refresh();
        assert_eq!(scheme_fired.load(Ordering::SeqCst), 1);
        assert_eq!(motion_fired.load(Ordering::SeqCst), 0);

        // Motion flip fires the motion listener only.
        source.set(SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: true,
        });
        watcher.refresh();
        assert_eq!(scheme_fired.load(Ordering::SeqCst), 1);
        assert_eq!(motion_fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_removes_both_listeners() {
        let source = FakeSource::shared(SystemSignal::FALLBACK);
        let watcher = SystemPreferenceWatcher::new(Box::new(source.clone()));

        let fired = Arc::new(AtomicUsize::new(0));
        let s = fired.clone();
        let m = fired.clone();
        let sub = watcher.subscribe(
            move |_| {
                s.fetch_add(1, Ordering::SeqCst);
            },
            move |_| {
                m.fetch_add(1, Ordering::SeqCst);
            },
        );
        sub.unsubscribe();

        source.set(SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: true,
        });
        watcher.refresh();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listener_can_reenter_watcher_during_refresh() {
        let source = FakeSource::shared(SystemSignal::FALLBACK);
        let watcher = SystemPreferenceWatcher::new(Box::new(source.clone()));

        let observed = Arc::new(Mutex::new(None));
        let observed_in = observed.clone();
        let weak = Arc::downgrade(&watcher);
        let _sub = watcher.subscribe(
            move |_| {
                if let Some(watcher) = weak.upgrade() {
                    *observed_in.lock().unwrap() = Some(watcher.current());
                }
            },
            |_| {},
        );

        source.set(SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: false,
        });
        watcher.refresh();

        let seen = observed.lock().unwrap().take().expect("listener fired");
        assert_eq!(seen.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn listener_can_drop_its_own_subscription_during_refresh() {
        let source = FakeSource::shared(SystemSignal::FALLBACK);
        let watcher = SystemPreferenceWatcher::new(Box::new(source.clone()));

        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let slot_in = slot.clone();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_in = fired.clone();
        let sub = watcher.subscribe(
            move |_| {
                fired_in.fetch_add(1, Ordering::SeqCst);
                drop(slot_in.lock().unwrap().take());
            },
            |_| {},
        );
        *slot.lock().unwrap() = Some(sub);

        source.set(SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: false,
        });
        watcher.refresh();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // The registration is gone: further deltas do not fire.
        source.set(SystemSignal {
            color_scheme: ColorScheme::Light,
            reduced_motion: false,
        });
        watcher.refresh();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let source = FakeSource::shared(SystemSignal::FALLBACK);
        let watcher = SystemPreferenceWatcher::new(Box::new(source.clone()));

        let fired = Arc::new(AtomicUsize::new(0));
        let s = fired.clone();
        {
            let _sub = watcher.subscribe(
                move |_| {
                    s.fetch_add(1, Ordering::SeqCst);
                },
                |_| {},
            );
        }
        source.set(SystemSignal {
            color_scheme: ColorScheme::Dark,
            reduced_motion: false,
        });
        watcher.refresh();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
