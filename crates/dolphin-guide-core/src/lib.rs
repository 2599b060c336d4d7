//! Dolphin Guide Core Library
//!
//! Content catalog and scroll-driven parallax logic for the Dolphin setup guide.
//!
//! ## Overview
//!
//! The guide is a single page: a header, an intro panel, a list of full-viewport
//! parallax sections and a footer. Everything that is not plain markup lives here
//! so it can be tested without a webview:
//!
//! - **Catalog**: the static, ordered list of sections and their steps
//! - **Ranges**: motion and opacity ranges derived from a section's document
//!   offset and the viewport height
//! - **Tracker**: a per-section state machine fed by layout samples
//! - **Subscriptions**: scoped listener handles released on drop
//! - **Scroll**: destination math for in-page navigation links
//!
//! ## Quick Start
//!
//! ```ignore
//! use dolphin_guide_core::{LayoutSample, SectionTracker};
//!
//! let mut tracker = SectionTracker::new("windows");
//! let style = tracker.observe(LayoutSample::attach(Some(420.0), 0.0, Some(900.0)))?;
//! println!("y = {}px, opacity = {}", style.background_y, style.content_opacity);
//! ```

pub mod catalog;
pub mod error;
pub mod interpolate;
pub mod logging;
pub mod range;
pub mod scroll;
pub mod subscription;
pub mod tracker;

// Re-exports
pub use catalog::{section_by_id, ContentSection, StepItem, StepLabel, SECTIONS};
pub use error::{GuideError, GuideResult};
pub use interpolate::{interpolate, Clamp};
pub use range::{RangeFactors, ViewportRange};
pub use scroll::{NavTarget, ScrollProbe, DEFAULT_HEADER_HEIGHT, DEFAULT_NAV_MARGIN};
pub use subscription::{Subscription, SubscriptionSet};
pub use tracker::{LayoutEvent, LayoutSample, SectionStyle, SectionTracker, TrackerPhase};
