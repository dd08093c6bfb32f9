//! Components of the placeholder screen

mod placeholder_screen;
mod snowfall;

pub use placeholder_screen::*;
pub use snowfall::*;
