//! Color tokens for theming

use cadence_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,
    PrimaryActive,

    // Semantic colors
    Success,
    Warning,
    Error,
    ErrorBg,

    // Surfaces
    Background,
    Surface,
    SurfaceElevated,

    // Text
    TextPrimary,
    TextSecondary,
    TextInverse,

    // Borders
    Border,
    BorderFocus,

    // Selection
    Selection,
    SelectionText,

    // Velocity chart colors
    ChartVelocity,
    ChartProjection,
    ChartGrid,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub error_bg: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    pub border: Color,
    pub border_focus: Color,

    pub selection: Color,
    pub selection_text: Color,

    pub chart_velocity: Color,
    pub chart_projection: Color,
    pub chart_grid: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::ErrorBg => self.error_bg,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Border => self.border,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::Selection => self.selection,
            ColorToken::SelectionText => self.selection_text,
            ColorToken::ChartVelocity => self.chart_velocity,
            ColorToken::ChartProjection => self.chart_projection,
            ColorToken::ChartGrid => self.chart_grid,
        }
    }
}
