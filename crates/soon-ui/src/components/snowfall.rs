//! Snowfall Overlay Component
//!
//! A full-size, click-through layer of falling snowflakes. Each flake is a
//! plain element moved by the `snowfall-drop` keyframes in
//! [`GLOBAL_STYLES`](crate::GLOBAL_STYLES); nothing is scheduled from Rust.

use dioxus::prelude::*;
use soon_core::SnowfallConfig;

/// Properties for the Snowfall component
#[derive(Clone, PartialEq, Props)]
pub struct SnowfallProps {
    /// Overlay settings (default: 150 pale blue flakes)
    #[props(default)]
    pub config: SnowfallConfig,
}

/// Renders the decorative snow layer over its positioned parent
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { style: "position: relative;",
///         h1 { "Soon" }
///         Snowfall {}
///     }
/// }
/// ```
#[component]
pub fn Snowfall(props: SnowfallProps) -> Element {
    let color = &props.config.color;
    let flakes: Vec<(u32, String)> = props
        .config
        .generate()
        .iter()
        .map(|flake| (flake.index, flake.style(color)))
        .collect();

    rsx! {
        div {
            class: "snowfall",
            style: "position: absolute; inset: 0; overflow: hidden; pointer-events: none;",
            "aria-hidden": "true",
            for (index, style) in flakes {
                div {
                    key: "{index}",
                    class: "snowflake",
                    style: "{style}",
                }
            }
        }
    }
}
