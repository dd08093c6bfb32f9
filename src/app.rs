use dioxus::prelude::*;
use soon_ui::GLOBAL_STYLES;

use crate::context::get_screen_config;
use crate::pages::Landing;

/// Application routes.
///
/// - `/` - The placeholder screen
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, screen config context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_screen_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
