//! Configuration context for Dolphin Guide.
//!
//! The CLI builds a [`GuideConfig`] once; the root component provides it to
//! every component via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(crate::get_config);
//!
//! // In child components
//! let config = use_config();
//! ```

use dioxus::prelude::*;
use dolphin_guide_core::DEFAULT_NAV_MARGIN;

/// DOM id of the element wrapping all parallax sections.
pub const SECTIONS_CONTAINER_ID: &str = "sections";

/// Runtime settings shared by all components.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GuideConfig {
    pub window_width: f64,
    pub window_height: f64,
    /// Gap left between the header and a nav link's target
    pub nav_margin: f64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 900.0,
            nav_margin: DEFAULT_NAV_MARGIN,
        }
    }
}

/// Hook to access the guide configuration from context.
pub fn use_config() -> GuideConfig {
    use_context::<GuideConfig>()
}
