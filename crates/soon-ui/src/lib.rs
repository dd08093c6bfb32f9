//! Soon UI Components
//!
//! Dioxus components for the "Soon" placeholder screen.
//!
//! ## Layers
//!
//! - **Container**: full-viewport div with the palette gradient
//! - **Heading**: centered headline in the text color
//! - **Snowfall**: click-through overlay of CSS-animated flakes
//!
//! The same tree is mounted in the desktop window and rendered to static
//! HTML by [`render_document`].

pub mod components;
pub mod document;
pub mod styles;

pub use components::*;
pub use document::{render_document, render_screen};
pub use styles::GLOBAL_STYLES;
