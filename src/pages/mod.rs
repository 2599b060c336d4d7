//! Page components for Dolphin Guide.

mod home;

pub use home::Home;
