//! Visual theme for Dolphin Guide.

mod styles;

pub use styles::GLOBAL_STYLES;
