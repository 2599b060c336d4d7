//! Viewport-relative motion and opacity ranges.
//!
//! Both ranges are anchored at a section's document offset and scaled by the
//! viewport height. The motion range spans from before the section enters
//! view to after it has mostly passed; the opacity breakpoints describe a
//! fade-in / hold / fade-out envelope.

use crate::interpolate::{interpolate, Clamp};

/// Background travel in pixels at the start and end of the motion range.
pub const MOTION_OUTPUT: [f64; 2] = [80.0, -80.0];

/// Opacity at each of the four breakpoints.
pub const OPACITY_OUTPUT: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// Viewport-height multipliers for each breakpoint.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RangeFactors {
    pub motion: [f64; 2],
    pub opacity: [f64; 4],
}

impl Default for RangeFactors {
    fn default() -> Self {
        Self {
            motion: [-1.2, 0.8],
            opacity: [-0.6, -0.2, 0.3, 0.7],
        }
    }
}

/// Scroll-position intervals for one section.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewportRange {
    /// `[start, end]` of the background motion
    pub motion: [f64; 2],
    /// Fade-in start, fully visible, fade-out start, invisible
    pub opacity: [f64; 4],
}

impl Default for ViewportRange {
    /// Placeholder ranges used until the section has been laid out.
    fn default() -> Self {
        Self {
            motion: [0.0, 1000.0],
            opacity: [0.0, 300.0, 700.0, 1000.0],
        }
    }
}

impl ViewportRange {
    /// Derive ranges from a document offset and viewport height.
    pub fn derive(offset: f64, viewport_height: f64, factors: &RangeFactors) -> Self {
        Self {
            motion: factors.motion.map(|f| offset + viewport_height * f),
            opacity: factors.opacity.map(|f| offset + viewport_height * f),
        }
    }

    /// Background vertical offset at `scroll_y`. Not clamped: the offset keeps
    /// moving past the range endpoints.
    pub fn background_y(&self, scroll_y: f64) -> f64 {
        interpolate(scroll_y, &self.motion, &MOTION_OUTPUT, Clamp::Extrapolate)
    }

    /// Content opacity at `scroll_y`, clamped to `[0, 1]`.
    pub fn content_opacity(&self, scroll_y: f64) -> f64 {
        interpolate(scroll_y, &self.opacity, &OPACITY_OUTPUT, Clamp::Clamped).clamp(0.0, 1.0)
    }
}
