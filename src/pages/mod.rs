//! Page components for routing.

mod landing;

pub use landing::Landing;
