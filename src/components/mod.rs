//! UI Components for Dolphin Guide.

mod footer;
mod header;
mod parallax_section;

pub use footer::Footer;
pub use header::Header;
pub use parallax_section::ParallaxSection;
