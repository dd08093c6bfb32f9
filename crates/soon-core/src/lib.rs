//! Soon Core Library
//!
//! Static configuration behind the "Soon" placeholder screen.
//!
//! ## Overview
//!
//! The screen is a heading over a two-stop gradient with snow falling on
//! top. This crate owns every value that goes into it:
//!
//! - **Palette**: validated hex colors and the CSS gradient built from them
//! - **Screen**: headline, text color and the container/heading styles
//! - **Snowfall**: overlay settings and deterministic snowflake layout
//!
//! Rendering lives in `soon-ui`; nothing here depends on a UI framework.
//!
//! ## Quick Start
//!
//! ```
//! use soon_core::ScreenConfig;
//!
//! let config = ScreenConfig::default();
//! assert_eq!(config.palette.gradient(), "linear-gradient(120deg, #111111, #222222)");
//! assert_eq!(config.snowfall.generate().len(), 150);
//! ```

pub mod error;
pub mod logging;
pub mod palette;
pub mod screen;
pub mod snowfall;

// Re-exports
pub use error::{Result, SoonError};
pub use palette::{HexColor, Palette};
pub use screen::ScreenConfig;
pub use snowfall::{Bounds, Snowflake, SnowfallConfig};
