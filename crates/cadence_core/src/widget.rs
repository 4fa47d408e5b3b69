//! Widget identity

use serde::{Deserialize, Serialize};

/// Opaque identifier for a widget in the UI tree.
///
/// The theme subsystem only ever holds one of these to remember which
/// widget had focus when a transition started; the UI layer owns the
/// mapping back to an actual element.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for WidgetId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
