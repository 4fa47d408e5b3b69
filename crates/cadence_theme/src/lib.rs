//! Cadence theme and accessibility subsystem
//!
//! Light/dark theming for the Cadence sprint planner: persisted user
//! preference, OS color-scheme and reduced-motion signals, transition
//! sequencing, screen-reader announcements, and WCAG contrast diagnostics.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cadence_theme::{ColorToken, ThemeState};
//!
//! // Wire the singleton at app startup
//! ThemeState::init_default();
//!
//! // Render from it
//! let theme = ThemeState::get();
//! let background = theme.color(ColorToken::Background);
//!
//! // Flip mode from the toggle control
//! theme.toggle(std::time::Instant::now());
//! ```
//!
//! # Design
//!
//! The effective display mode is recomputed in the same call that writes
//! the preference, so views never render from a stale mode. The visible
//! "switching" window is a separate concern owned by
//! [`TransitionController`]; it only gates the toggle control and
//! animations, and settles after a short delay (instantly under reduced
//! motion).
//!
//! Every failure in this subsystem degrades silently: unreadable storage
//! falls back to the `system` preference, a host without signal APIs gets
//! fixed defaults and no-op subscriptions, and focus restoration errors
//! are logged and dropped. Theming must never block the planner.

pub mod announce;
pub mod contrast;
pub mod platform;
pub mod preference;
pub mod state;
pub mod system;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod transition;

// Re-export commonly used types
pub use announce::{AccessibilityAnnouncer, Announcement, LiveRegion, Priority, QueueLiveRegion};
pub use contrast::{meets_aa, meets_aaa, ratio, validate, ColorCombination, ContrastReport};
pub use platform::{detect_system_signal, PlatformSource};
pub use preference::{resolve, PreferenceStore, StorageBackend, ThemePreference, PREFERENCE_KEY};
pub use state::{set_redraw_callback, ThemeState};
pub use system::{SignalSource, Subscription, SystemPreferenceWatcher, SystemSignal};
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::{contrast_combinations, PlannerTheme};
pub use tokens::*;
pub use transition::{FocusAdapter, TransitionConfig, TransitionController};
