//! Static HTML rendering of the placeholder screen.

use dioxus::prelude::*;
use soon_core::ScreenConfig;

use crate::components::{PlaceholderScreen, PlaceholderScreenProps};
use crate::styles::GLOBAL_STYLES;

/// Renders just the screen markup (no `<html>` wrapper).
pub fn render_screen(config: &ScreenConfig) -> String {
    let mut dom = VirtualDom::new_with_props(
        PlaceholderScreen,
        PlaceholderScreenProps {
            config: config.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders a standalone HTML5 page with the global styles inlined.
pub fn render_document(config: &ScreenConfig) -> String {
    let body = render_screen(config);
    tracing::debug!(
        "Rendered screen with {} snowflakes ({} bytes)",
        config.snowfall.visible_count(),
        body.len()
    );

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>{}</body>\n\
         </html>\n",
        escape_text(&config.headline),
        GLOBAL_STYLES,
        body
    )
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
