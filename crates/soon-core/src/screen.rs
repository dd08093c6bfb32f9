//! Screen configuration and the inline styles derived from it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SoonError};
use crate::palette::{HexColor, Palette, TEXT};
use crate::snowfall::SnowfallConfig;

/// Heading shown when nothing else is configured
pub const DEFAULT_HEADLINE: &str = "Soon";

pub const CONTAINER_HEIGHT: &str = "100vh";
pub const CONTAINER_PADDING: &str = "20px";

/// Everything the placeholder screen needs to render.
///
/// Missing fields in a config file fall back to the defaults, which
/// reproduce the stock "Soon" page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Heading text
    pub headline: String,
    /// Background gradient stops
    pub palette: Palette,
    /// Heading color
    pub text_color: HexColor,
    /// Decorative overlay settings
    pub snowfall: SnowfallConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            headline: DEFAULT_HEADLINE.to_string(),
            palette: Palette::default(),
            text_color: HexColor::from_static(TEXT),
            snowfall: SnowfallConfig::default(),
        }
    }
}

impl ScreenConfig {
    /// Reads a JSON config file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!("Loaded screen config from {:?}", path);
        Ok(config)
    }

    /// Parses a JSON document and validates it.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.headline.trim().is_empty() {
            return Err(SoonError::EmptyHeadline);
        }
        self.snowfall.validate()
    }

    /// Inline style of the full-viewport container.
    ///
    /// The container is positioned so the snowfall overlay stays inside it.
    pub fn container_style(&self) -> String {
        format!(
            "background: {}; height: {}; padding: {}; position: relative; overflow: hidden;",
            self.palette.gradient(),
            CONTAINER_HEIGHT,
            CONTAINER_PADDING,
        )
    }

    /// Inline style of the heading
    pub fn heading_style(&self) -> String {
        format!("color: {}; text-align: center;", self.text_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snowfall::Bounds;

    #[test]
    fn default_styles() {
        let config = ScreenConfig::default();
        assert_eq!(config.headline, "Soon");
        assert_eq!(
            config.container_style(),
            "background: linear-gradient(120deg, #111111, #222222); height: 100vh; padding: 20px; position: relative; overflow: hidden;"
        );
        assert_eq!(config.heading_style(), "color: #FFFFFF; text-align: center;");
    }

    #[test]
    fn styles_are_stable() {
        let config = ScreenConfig::default();
        assert_eq!(config.container_style(), config.container_style());
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(ScreenConfig::from_json("{}").unwrap(), ScreenConfig::default());
    }

    #[test]
    fn json_overrides_merge_with_defaults() {
        let config = ScreenConfig::from_json(
            r##"{"headline": "Later", "text_color": "#eee", "snowfall": {"seed": 9}}"##,
        )
        .unwrap();
        assert_eq!(config.headline, "Later");
        assert_eq!(config.text_color.as_str(), "#eee");
        assert_eq!(config.snowfall.seed, 9);
        assert_eq!(config.snowfall.count, 150);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn blank_headline_is_rejected() {
        let result = ScreenConfig::from_json(r#"{"headline": "   "}"#);
        assert!(matches!(result, Err(SoonError::EmptyHeadline)));
    }

    #[test]
    fn invalid_snowfall_is_rejected() {
        let config = ScreenConfig {
            snowfall: SnowfallConfig {
                wind: Bounds::new(2.0, -2.0),
                ..SnowfallConfig::default()
            },
            ..ScreenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SoonError::InvalidBounds { field: "wind", .. })
        ));
    }

    #[test]
    fn oversized_snowfall_json_is_rejected() {
        let result = ScreenConfig::from_json(r#"{"snowfall": {"count": 4294967295}}"#);
        assert!(matches!(result, Err(SoonError::TooManySnowflakes { .. })));

        let result = ScreenConfig::from_json(r#"{"snowfall": {"count": 1, "wind": [-3e38, 3e38]}}"#);
        assert!(matches!(
            result,
            Err(SoonError::InvalidBounds { field: "wind", .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            ScreenConfig::from_json("{headline"),
            Err(SoonError::Config(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soon.json");
        std::fs::write(&path, r##"{"palette": {"dark": "#000000"}}"##).unwrap();

        let config = ScreenConfig::load(&path).unwrap();
        assert_eq!(
            config.palette.gradient(),
            "linear-gradient(120deg, #000000, #222222)"
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScreenConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(SoonError::Io(_))));
    }
}
