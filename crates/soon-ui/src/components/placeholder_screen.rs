//! Placeholder Screen Component
//!
//! The whole "Soon" page: gradient container, centered heading and the
//! snowfall overlay on top.

use dioxus::prelude::*;
use soon_core::ScreenConfig;

use super::Snowfall;

/// Properties for the PlaceholderScreen component
#[derive(Clone, PartialEq, Props)]
pub struct PlaceholderScreenProps {
    /// Headline, colors and snow settings (default: the stock "Soon" page)
    #[props(default)]
    pub config: ScreenConfig,
}

/// Renders the placeholder landing screen
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PlaceholderScreen { config: ScreenConfig::default() }
/// }
/// ```
#[component]
pub fn PlaceholderScreen(props: PlaceholderScreenProps) -> Element {
    let container_style = props.config.container_style();
    let heading_style = props.config.heading_style();
    let headline = &props.config.headline;

    rsx! {
        div { class: "soon-screen", style: "{container_style}",
            h1 { class: "soon-headline", style: "{heading_style}", "{headline}" }
            Snowfall { config: props.config.snowfall.clone() }
        }
    }
}
