//! WCAG contrast diagnostics
//!
//! Offline tooling that audits theme color pairs against the WCAG 2.x
//! contrast thresholds. It never gates rendering; build and dev tasks run
//! it to catch palette regressions.

use cadence_core::Color;

/// Minimum ratio for AA conformance, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AA conformance, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA conformance, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AAA conformance, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Mid gray stand-in for unparseable color strings. Keeps the audit
/// running instead of aborting on one bad entry.
const NEUTRAL: Color = Color::rgb(0.5, 0.5, 0.5);

/// A foreground/background pair to audit, with a label saying where in the
/// UI it appears.
#[derive(Clone, Debug)]
pub struct ColorCombination {
    pub context: String,
    pub foreground: String,
    pub background: String,
    pub large_text: bool,
}

impl ColorCombination {
    pub fn new(
        context: impl Into<String>,
        foreground: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            foreground: foreground.into(),
            background: background.into(),
            large_text: false,
        }
    }

    pub fn large_text(mut self) -> Self {
        self.large_text = true;
        self
    }
}

/// Audit result for one combination.
#[derive(Clone, Debug)]
pub struct ContrastReport {
    pub context: String,
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub recommendation: &'static str,
}

fn parse_or_neutral(input: &str) -> Color {
    Color::parse(input).unwrap_or_else(|| {
        tracing::debug!(input, "unparseable color in contrast audit, using neutral gray");
        NEUTRAL
    })
}

fn srgb_to_linear(channel: f32) -> f64 {
    let c = channel as f64;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color, in 0.0..=1.0.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// Contrast ratio between two colors, in 1.0..=21.0.
pub fn ratio_of(fg: Color, bg: Color) -> f64 {
    let l1 = relative_luminance(fg);
    let l2 = relative_luminance(bg);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio from color strings (`#rrggbb`, `rgb()`, `rgba()`).
/// Unparseable input falls back to a neutral gray rather than failing.
pub fn ratio(fg: &str, bg: &str) -> f64 {
    ratio_of(parse_or_neutral(fg), parse_or_neutral(bg))
}

/// AA conformance: 4.5 for normal text, 3.0 for large text.
pub fn meets_aa(fg: &str, bg: &str, is_large_text: bool) -> bool {
    let threshold = if is_large_text { AA_LARGE } else { AA_NORMAL };
    ratio(fg, bg) >= threshold
}

/// AAA conformance: 7.0 for normal text, 4.5 for large text.
pub fn meets_aaa(fg: &str, bg: &str, is_large_text: bool) -> bool {
    let threshold = if is_large_text { AAA_LARGE } else { AAA_NORMAL };
    ratio(fg, bg) >= threshold
}

/// Audit a set of combinations.
pub fn validate(combinations: &[ColorCombination]) -> Vec<ContrastReport> {
    combinations
        .iter()
        .map(|combo| {
            let value = ratio(&combo.foreground, &combo.background);
            let aa_threshold = if combo.large_text { AA_LARGE } else { AA_NORMAL };
            let aaa_threshold = if combo.large_text { AAA_LARGE } else { AAA_NORMAL };
            let meets_aa = value >= aa_threshold;
            let meets_aaa = value >= aaa_threshold;
            let recommendation = if meets_aaa {
                "meets AAA"
            } else if meets_aa {
                "meets AA; consider darkening for AAA"
            } else {
                "fails AA: increase contrast"
            };
            ContrastReport {
                context: combo.context.clone(),
                ratio: value,
                meets_aa,
                meets_aaa,
                recommendation,
            }
        })
        .collect()
}
