//! RGBA color type and string parsing

use serde::{Deserialize, Serialize};

/// RGBA color (component range 0.0..=1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse `#rrggbb`, `#rgb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Returns `None` for anything else; callers that must not fail pick
    /// their own fallback.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = s
            .strip_prefix("rgba")
            .or_else(|| s.strip_prefix("rgb"))
            .map(str::trim)
        {
            let body = body.strip_prefix('(')?.strip_suffix(')')?;
            return Self::parse_components(body);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::from_hex(value))
            }
            // #rgb shorthand: each nibble doubled
            3 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                let r = (value >> 8) & 0xF;
                let g = (value >> 4) & 0xF;
                let b = value & 0xF;
                Some(Self::from_hex((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)))
            }
            _ => None,
        }
    }

    fn parse_components(body: &str) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }
        let channel = |s: &str| -> Option<f32> {
            let v: f32 = s.parse().ok()?;
            if (0.0..=255.0).contains(&v) {
                Some(v / 255.0)
            } else {
                None
            }
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if parts.len() == 4 {
            let v: f32 = parts[3].parse().ok()?;
            if (0.0..=1.0).contains(&v) {
                v
            } else {
                return None;
            }
        } else {
            1.0
        };
        Some(Self::rgba(r, g, b, a))
    }

    /// Format as `#rrggbb`, or `rgba(...)` when alpha is not opaque.
    pub fn to_css_string(&self) -> String {
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                (self.r * 255.0) as u8,
                (self.g * 255.0) as u8,
                (self.b * 255.0) as u8,
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                (self.r * 255.0) as u8,
                (self.g * 255.0) as u8,
                (self.b * 255.0) as u8
            )
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
