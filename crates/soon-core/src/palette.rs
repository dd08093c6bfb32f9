//! Color constants and the background palette.
//!
//! Dark, low-contrast gradient with white type and pale blue snow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SoonError;

// === BACKGROUND ===
pub const DARK: &str = "#111111";
pub const ACCENT: &str = "#222222";

// === TEXT ===
pub const TEXT: &str = "#FFFFFF";

// === SNOW ===
pub const SNOW: &str = "#dee4fd";

/// Direction of the background gradient, in degrees
pub const GRADIENT_ANGLE_DEG: u16 = 120;

/// A CSS hex color (`#RGB`, `#RRGGBB` or `#RRGGBBAA`).
///
/// The original text is kept as given, so `#FFFFFF` stays upper case when
/// written back into a style.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// The color exactly as it appears in CSS
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds a color from one of the constants in this module.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_hex_color(value));
        Self(value.to_string())
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

impl FromStr for HexColor {
    type Err = SoonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_hex_color(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(SoonError::InvalidColor(s.to_string()))
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = SoonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-stop background palette
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// First gradient stop
    pub dark: HexColor,
    /// Second gradient stop
    pub accent: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: HexColor::from_static(DARK),
            accent: HexColor::from_static(ACCENT),
        }
    }
}

impl Palette {
    /// CSS `background` value running from `dark` to `accent`
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            GRADIENT_ANGLE_DEG, self.dark, self.accent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gradient() {
        assert_eq!(
            Palette::default().gradient(),
            "linear-gradient(120deg, #111111, #222222)"
        );
    }

    #[test]
    fn accepts_short_long_and_alpha_forms() {
        for value in ["#fff", "#FFFFFF", "#dee4fd", "#00000080"] {
            let color: HexColor = value.parse().unwrap();
            assert_eq!(color.as_str(), value);
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        for value in ["", "#", "fff", "#ffff", "#12345g", "red", "#1234567"] {
            assert!(
                matches!(value.parse::<HexColor>(), Err(SoonError::InvalidColor(_))),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let color: HexColor = "  #abc ".parse().unwrap();
        assert_eq!(color.to_string(), "#abc");
    }

    #[test]
    fn deserialize_rejects_invalid_color() {
        let result: Result<Palette, _> =
            serde_json::from_str(r##"{"dark": "black", "accent": "#222222"}"##);
        assert!(result.is_err());
    }

    #[test]
    fn partial_palette_keeps_defaults() {
        let palette: Palette = serde_json::from_str(r##"{"accent": "#333333"}"##).unwrap();
        assert_eq!(palette.dark.as_str(), DARK);
        assert_eq!(palette.gradient(), "linear-gradient(120deg, #111111, #333333)");
    }
}
