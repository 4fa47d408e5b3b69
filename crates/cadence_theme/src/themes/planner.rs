//! Default Cadence planner theme
//!
//! Material-flavored palette: a blue primary over neutral grays, with the
//! dark variant using desaturated tints on near-black surfaces so sprint
//! boards stay readable in both modes.

use crate::contrast::ColorCombination;
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::ColorTokens;
use cadence_core::Color;
use std::sync::Arc;

/// Light palette constants
pub mod day {
    use cadence_core::Color;

    pub const PRIMARY: Color = Color::rgb(25.0 / 255.0, 118.0 / 255.0, 210.0 / 255.0); // #1976D2
    pub const PRIMARY_HOVER: Color = Color::rgb(21.0 / 255.0, 101.0 / 255.0, 192.0 / 255.0); // #1565C0
    pub const PRIMARY_ACTIVE: Color = Color::rgb(13.0 / 255.0, 71.0 / 255.0, 161.0 / 255.0); // #0D47A1
    pub const SUCCESS: Color = Color::rgb(46.0 / 255.0, 125.0 / 255.0, 50.0 / 255.0); // #2E7D32
    pub const WARNING: Color = Color::rgb(237.0 / 255.0, 108.0 / 255.0, 2.0 / 255.0); // #ED6C02
    pub const ERROR: Color = Color::rgb(211.0 / 255.0, 47.0 / 255.0, 47.0 / 255.0); // #D32F2F
    pub const BACKGROUND: Color = Color::rgb(250.0 / 255.0, 250.0 / 255.0, 250.0 / 255.0); // #FAFAFA
    pub const SURFACE: Color = Color::WHITE;
    pub const TEXT: Color = Color::rgb(33.0 / 255.0, 33.0 / 255.0, 33.0 / 255.0); // #212121
    pub const TEXT_MUTED: Color = Color::rgb(97.0 / 255.0, 97.0 / 255.0, 97.0 / 255.0); // #616161
    pub const BORDER: Color = Color::rgb(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0); // #E0E0E0
    pub const PROJECTION: Color = Color::rgb(123.0 / 255.0, 31.0 / 255.0, 162.0 / 255.0); // #7B1FA2
}

/// Dark palette constants
pub mod night {
    use cadence_core::Color;

    pub const PRIMARY: Color = Color::rgb(144.0 / 255.0, 202.0 / 255.0, 249.0 / 255.0); // #90CAF9
    pub const PRIMARY_HOVER: Color = Color::rgb(100.0 / 255.0, 181.0 / 255.0, 246.0 / 255.0); // #64B5F6
    pub const PRIMARY_ACTIVE: Color = Color::rgb(66.0 / 255.0, 165.0 / 255.0, 245.0 / 255.0); // #42A5F5
    pub const SUCCESS: Color = Color::rgb(129.0 / 255.0, 199.0 / 255.0, 132.0 / 255.0); // #81C784
    pub const WARNING: Color = Color::rgb(255.0 / 255.0, 183.0 / 255.0, 77.0 / 255.0); // #FFB74D
    pub const ERROR: Color = Color::rgb(239.0 / 255.0, 83.0 / 255.0, 80.0 / 255.0); // #EF5350
    pub const BACKGROUND: Color = Color::rgb(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0); // #121212
    pub const SURFACE: Color = Color::rgb(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0); // #1E1E1E
    pub const SURFACE_ELEVATED: Color = Color::rgb(36.0 / 255.0, 36.0 / 255.0, 36.0 / 255.0); // #242424
    pub const TEXT: Color = Color::rgb(238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0); // #EEEEEE
    pub const TEXT_MUTED: Color = Color::rgb(176.0 / 255.0, 190.0 / 255.0, 197.0 / 255.0); // #B0BEC5
    pub const BORDER: Color = Color::rgb(55.0 / 255.0, 55.0 / 255.0, 55.0 / 255.0); // #373737
    pub const PROJECTION: Color = Color::rgb(206.0 / 255.0, 147.0 / 255.0, 216.0 / 255.0); // #CE93D8
}

/// The built-in planner theme (one scheme's worth of tokens).
#[derive(Clone, Debug)]
pub struct PlannerTheme {
    scheme: ColorScheme,
    colors: ColorTokens,
}

impl PlannerTheme {
    /// Light variant
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                primary: day::PRIMARY,
                primary_hover: day::PRIMARY_HOVER,
                primary_active: day::PRIMARY_ACTIVE,
                success: day::SUCCESS,
                warning: day::WARNING,
                error: day::ERROR,
                error_bg: day::ERROR.with_alpha(0.1),
                background: day::BACKGROUND,
                surface: day::SURFACE,
                surface_elevated: day::SURFACE,
                text_primary: day::TEXT,
                text_secondary: day::TEXT_MUTED,
                text_inverse: Color::WHITE,
                border: day::BORDER,
                border_focus: day::PRIMARY,
                selection: day::PRIMARY.with_alpha(0.3),
                selection_text: day::TEXT,
                chart_velocity: day::PRIMARY,
                chart_projection: day::PROJECTION,
                chart_grid: day::BORDER,
            },
        }
    }

    /// Dark variant
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                primary: night::PRIMARY,
                primary_hover: night::PRIMARY_HOVER,
                primary_active: night::PRIMARY_ACTIVE,
                success: night::SUCCESS,
                warning: night::WARNING,
                error: night::ERROR,
                error_bg: night::ERROR.with_alpha(0.16),
                background: night::BACKGROUND,
                surface: night::SURFACE,
                surface_elevated: night::SURFACE_ELEVATED,
                text_primary: night::TEXT,
                text_secondary: night::TEXT_MUTED,
                text_inverse: night::BACKGROUND,
                border: night::BORDER,
                border_focus: night::PRIMARY,
                selection: night::PRIMARY.with_alpha(0.3),
                selection_text: night::TEXT,
                chart_velocity: night::PRIMARY,
                chart_projection: night::PROJECTION,
                chart_grid: night::BORDER,
            },
        }
    }

    /// Light/dark bundle for this theme.
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new(
            "Planner",
            Arc::new(Self::light()),
            Arc::new(Self::dark()),
        )
    }
}

impl Theme for PlannerTheme {
    fn name(&self) -> &str {
        "Planner"
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }
}

/// The color pairs the contrast audit checks for a theme, labeled by where
/// they appear in the planner UI.
pub fn contrast_combinations(theme: &dyn Theme) -> Vec<ColorCombination> {
    let colors = theme.colors();
    let pair = |context: &str, fg: Color, bg: Color| {
        ColorCombination::new(context, fg.to_css_string(), bg.to_css_string())
    };
    vec![
        pair("body text", colors.text_primary, colors.background),
        pair("secondary text on cards", colors.text_secondary, colors.surface),
        pair("primary button label", colors.text_inverse, colors.primary),
        pair("error message", colors.error, colors.background),
        pair(
            "velocity chart bars",
            colors.chart_velocity,
            colors.surface,
        )
        .large_text(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_pairs_match_their_schemes() {
        let bundle = PlannerTheme::bundle();
        assert_eq!(
            bundle.for_scheme(ColorScheme::Light).color_scheme(),
            ColorScheme::Light
        );
        assert_eq!(
            bundle.for_scheme(ColorScheme::Dark).color_scheme(),
            ColorScheme::Dark
        );
    }

    #[test]
    fn light_and_dark_surfaces_differ() {
        let light = PlannerTheme::light();
        let dark = PlannerTheme::dark();
        assert_ne!(light.colors().background, dark.colors().background);
        assert_ne!(light.colors().text_primary, dark.colors().text_primary);
    }
}
