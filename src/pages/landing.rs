//! Landing page - the only route.

use dioxus::prelude::*;
use soon_ui::PlaceholderScreen;

use crate::context::use_screen_config;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_screen_config();

    rsx! {
        PlaceholderScreen { config }
    }
}
