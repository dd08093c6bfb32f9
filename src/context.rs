//! Screen config context for the desktop app.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_screen_config);
//!
//! // In child components
//! let config = use_screen_config();
//! ```

use dioxus::prelude::*;
use soon_core::ScreenConfig;

/// Get the screen configuration for the application.
/// Uses the global config set from command line args.
pub fn get_screen_config() -> ScreenConfig {
    crate::get_screen_config()
}

/// Hook to access the screen configuration from context.
pub fn use_screen_config() -> ScreenConfig {
    use_context::<ScreenConfig>()
}
