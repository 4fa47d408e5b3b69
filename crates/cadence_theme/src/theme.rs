//! Color scheme and theme bundle types

use crate::tokens::ColorTokens;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// The two renderable color schemes.
///
/// This is the *effective* mode: a stored preference may be `system`, but
/// what actually renders is always exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Flip light <-> dark
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Stable id for config/serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete theme: a named set of color tokens for one scheme.
pub trait Theme: Send + Sync {
    fn name(&self) -> &str;
    fn color_scheme(&self) -> ColorScheme;
    fn colors(&self) -> &ColorTokens;
}

/// A light/dark theme pair.
#[derive(Clone)]
pub struct ThemeBundle {
    name: &'static str,
    light: Arc<dyn Theme>,
    dark: Arc<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(name: &'static str, light: Arc<dyn Theme>, dark: Arc<dyn Theme>) -> Self {
        debug_assert_eq!(light.color_scheme(), ColorScheme::Light);
        debug_assert_eq!(dark.color_scheme(), ColorScheme::Dark);
        Self { name, light, dark }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Select the theme for a scheme.
    pub fn for_scheme(&self, scheme: ColorScheme) -> &dyn Theme {
        match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(scheme.toggle().toggle(), scheme);
        }
    }

    #[test]
    fn scheme_ids_are_stable() {
        assert_eq!(ColorScheme::Light.as_str(), "light");
        assert_eq!(ColorScheme::Dark.as_str(), "dark");
    }
}
