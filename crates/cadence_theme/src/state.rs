//! Global theme state
//!
//! `ThemeState` owns the resolved theme the widgets render from. The core
//! ordering rule: the effective scheme visible to consumers updates in the
//! same call that writes the preference, so no render ever observes a
//! stale (mode, preference) pair. The transition controller's switching
//! flag is deliberately separate; it gates interactivity and animation,
//! never data.

use crate::announce::{AccessibilityAnnouncer, LiveRegion, QueueLiveRegion};
use crate::platform::PlatformSource;
use crate::preference::{resolve, PreferenceStore, ThemePreference};
use crate::system::{Subscription, SystemPreferenceWatcher};
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::themes::PlannerTheme;
use crate::tokens::{ColorToken, ColorTokens};
use crate::transition::{NullFocusAdapter, TransitionConfig, TransitionController};
use cadence_core::Color;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::Instant;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Register the function the app layer uses to schedule a redraw after a
/// theme change.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

/// Theme state - accessed directly by widgets during render.
pub struct ThemeState {
    /// The current theme bundle (light/dark pair)
    bundle: ThemeBundle,

    /// Persisted preference access
    store: PreferenceStore,

    /// System signal observer
    watcher: Arc<SystemPreferenceWatcher>,

    /// Stored preference mirror
    preference: RwLock<ThemePreference>,

    /// Resolved display mode; always light or dark
    effective: RwLock<ColorScheme>,

    /// Switching-window sequencer
    transition: TransitionController,

    /// Screen-reader announcements
    announcer: AccessibilityAnnouncer,

    /// Flag indicating theme colors changed since last repaint
    needs_repaint: AtomicBool,

    /// Keeps the global watcher registration alive (set by `install`)
    system_subscription: Mutex<Option<Subscription>>,
}

impl ThemeState {
    pub fn new(
        bundle: ThemeBundle,
        store: PreferenceStore,
        watcher: Arc<SystemPreferenceWatcher>,
        transition: TransitionController,
        announcer: AccessibilityAnnouncer,
    ) -> Self {
        let preference = store.get();
        let effective = resolve(preference, watcher.current());
        Self {
            bundle,
            store,
            watcher,
            preference: RwLock::new(preference),
            effective: RwLock::new(effective),
            transition,
            announcer,
            needs_repaint: AtomicBool::new(false),
            system_subscription: Mutex::new(None),
        }
    }

    /// Install a state as the process-wide singleton and hook it up to the
    /// system watcher. Call once at app startup; later calls are ignored.
    pub fn install(state: ThemeState) -> &'static ThemeState {
        let _ = THEME_STATE.set(state);
        let installed = Self::get();
        let subscription = installed.watcher.subscribe(
            |scheme| {
                if let Some(state) = ThemeState::try_get() {
                    state.handle_system_scheme(scheme);
                }
            },
            |reduced| {
                tracing::trace!(reduced_motion = reduced, "system motion signal changed");
            },
        );
        *installed.system_subscription.lock().unwrap() = Some(subscription);
        installed
    }

    /// Default wiring: planner bundle, file-backed preference in the user
    /// config directory, OS signal source.
    pub fn init_default() -> &'static ThemeState {
        let watcher = SystemPreferenceWatcher::new(Box::new(PlatformSource));
        let state = ThemeState::new(
            PlannerTheme::bundle(),
            PreferenceStore::with_file(default_preference_path()),
            watcher,
            TransitionController::new(
                TransitionConfig::default(),
                Box::new(NullFocusAdapter),
            ),
            AccessibilityAnnouncer::new(Arc::new(QueueLiveRegion::default()) as Arc<dyn LiveRegion>),
        );
        Self::install(state)
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::install() at app startup.")
    }

    /// Try to get the global theme state (returns None if not installed)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Preference & effective mode ==========

    /// The stored user preference (may be `system`).
    pub fn preference(&self) -> ThemePreference {
        *self.preference.read().unwrap()
    }

    /// The mode actually rendering right now.
    pub fn effective_scheme(&self) -> ColorScheme {
        *self.effective.read().unwrap()
    }

    /// Set an explicit preference (or back to `system`).
    ///
    /// The in-memory preference and the effective scheme update before the
    /// best-effort persist, so a failed write never leaves consumers on a
    /// stale mode.
    pub fn set_preference(&self, pref: ThemePreference) {
        let previous = self.effective_scheme();
        *self.preference.write().unwrap() = pref;
        let effective = resolve(pref, self.watcher.current());
        *self.effective.write().unwrap() = effective;
        self.store.set(pref);

        if effective != previous {
            tracing::debug!(from = %previous, to = %effective, preference = %pref, "scheme switched");
            self.announcer.announce_scheme(effective);
            self.needs_repaint.store(true, Ordering::SeqCst);
            trigger_redraw();
        }
    }

    /// Flip light<->dark in response to the toggle control.
    ///
    /// Toggling always lands on an explicit preference, even from `system`.
    /// Returns `false` when a transition is already in flight (the request
    /// is dropped, not queued).
    pub fn toggle(&self, now: Instant) -> bool {
        if self.transition.is_transitioning() {
            tracing::trace!("toggle ignored: transition already in progress");
            return false;
        }
        // Flip and persist first; the switching window opens around an
        // already-applied mode.
        let pref = match self.effective_scheme().toggle() {
            ColorScheme::Light => ThemePreference::Light,
            ColorScheme::Dark => ThemePreference::Dark,
        };
        self.set_preference(pref);
        self.transition.begin(now, self.watcher.current().reduced_motion)
    }

    // ========== Transition ==========

    /// Whether the toggle control should be inert right now.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    /// Drive the settle deadline. Returns true while more frames are
    /// needed.
    pub fn tick(&self, now: Instant) -> bool {
        self.transition.tick(now)
    }

    // ========== System signal ==========

    /// Re-query the OS signals and apply any change. Hosts call this on
    /// their poll cadence or from a native notification hook.
    pub fn refresh_system(&self) {
        let signal = self.watcher.refresh();
        self.handle_system_scheme(signal.color_scheme);
    }

    fn handle_system_scheme(&self, scheme: ColorScheme) {
        if !self.preference().is_system() {
            // Explicit preference wins; nothing to recompute.
            return;
        }
        let previous = self.effective_scheme();
        if scheme == previous {
            return;
        }
        *self.effective.write().unwrap() = scheme;
        tracing::debug!(from = %previous, to = %scheme, "system scheme change applied");
        self.needs_repaint.store(true, Ordering::SeqCst);
        trigger_redraw();
    }

    // ========== Theme access ==========

    /// The theme for the current effective scheme.
    pub fn theme(&self) -> &dyn Theme {
        self.bundle.for_scheme(self.effective_scheme())
    }

    /// All color tokens for the current effective scheme.
    pub fn colors(&self) -> ColorTokens {
        self.theme().colors().clone()
    }

    /// One color token for the current effective scheme.
    pub fn color(&self, token: ColorToken) -> Color {
        self.theme().colors().get(token)
    }

    pub fn bundle(&self) -> &ThemeBundle {
        &self.bundle
    }

    pub fn announcer(&self) -> &AccessibilityAnnouncer {
        &self.announcer
    }

    // ========== Dirty flag ==========

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    /// Teardown: cancel any pending settle and detach from the watcher.
    pub fn teardown(&self) {
        self.transition.clear();
        if let Some(subscription) = self.system_subscription.lock().unwrap().take() {
            subscription.unsubscribe();
        }
    }
}

fn default_preference_path() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map(|base| base.join("cadence").join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("cadence-settings.toml"))
}
