//! Per-section layout tracker.
//!
//! Each rendered section owns one [`SectionTracker`]. The DOM bridge feeds it
//! [`LayoutSample`]s on attach, scroll, resize and body layout changes; the
//! tracker moves through
//!
//! ```text
//! Uninitialized --(positive offset)--> OffsetKnown --(viewport height)--> RangesKnown
//!        \______________________________________________________________/
//!                                    |
//!                                 detach()
//!                                    v
//!                                 Detached
//! ```
//!
//! and produces the [`SectionStyle`] applied to the section's layers.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};
use crate::range::{RangeFactors, ViewportRange};

/// What triggered a layout sample.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutEvent {
    /// Initial measurement when listeners are installed
    Attach,
    Scroll,
    Resize,
    /// ResizeObserver on the document body fired
    Layout,
}

/// One measurement reported by the webview.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LayoutSample {
    pub event: LayoutEvent,
    /// Viewport-relative top of the section element; `None` if not laid out
    pub element_top: Option<f64>,
    /// Current window scroll position
    pub scroll_y: f64,
    /// `window.innerHeight`; `None` if unavailable
    pub viewport_height: Option<f64>,
}

impl LayoutSample {
    pub fn attach(element_top: Option<f64>, scroll_y: f64, viewport_height: Option<f64>) -> Self {
        Self {
            event: LayoutEvent::Attach,
            element_top,
            scroll_y,
            viewport_height,
        }
    }

    /// Same measurement, tagged with a different event.
    pub fn with_event(mut self, event: LayoutEvent) -> Self {
        self.event = event;
        self
    }

    /// Section top relative to the full document, or 0 when unknown.
    pub fn document_offset(&self) -> f64 {
        self.element_top
            .map(|top| top + self.scroll_y)
            .filter(|offset| offset.is_finite())
            .unwrap_or(0.0)
    }

    fn usable_viewport_height(&self) -> Option<f64> {
        self.viewport_height.filter(|h| h.is_finite() && *h >= 0.0)
    }
}

/// Where a tracker is in its lifecycle.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum TrackerPhase {
    /// No positive offset observed yet; placeholder ranges in use
    #[default]
    Uninitialized,
    /// Offset known but the viewport height is not
    OffsetKnown { offset: f64 },
    /// Ranges derived from `offset` and `viewport_height`
    RangesKnown { offset: f64, viewport_height: f64 },
    /// Section unmounted; further samples are rejected
    Detached,
}

impl TrackerPhase {
    pub fn label(&self) -> &'static str {
        match self {
            TrackerPhase::Uninitialized => "uninitialized",
            TrackerPhase::OffsetKnown { .. } => "offset-known",
            TrackerPhase::RangesKnown { .. } => "ranges-known",
            TrackerPhase::Detached => "detached",
        }
    }
}

/// Presentation-only output for one section.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionStyle {
    /// Background layer translateY in pixels
    pub background_y: f64,
    /// Content layer opacity in `[0, 1]`
    pub content_opacity: f64,
}

impl SectionStyle {
    /// Inline CSS for the background layer.
    pub fn background_css(&self) -> String {
        format!("transform: translateY({:.2}px);", self.background_y)
    }

    /// Inline CSS for the content layer.
    pub fn content_css(&self) -> String {
        format!("opacity: {:.3};", self.content_opacity)
    }
}

/// Layout state for a single parallax section.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    id: String,
    phase: TrackerPhase,
    ranges: ViewportRange,
    scroll_y: f64,
    factors: RangeFactors,
    updates: u64,
}

impl SectionTracker {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_factors(id, RangeFactors::default())
    }

    pub fn with_factors(id: impl Into<String>, factors: RangeFactors) -> Self {
        Self {
            id: id.into(),
            phase: TrackerPhase::Uninitialized,
            ranges: ViewportRange::default(),
            scroll_y: 0.0,
            factors,
            updates: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> TrackerPhase {
        self.phase
    }

    pub fn ranges(&self) -> ViewportRange {
        self.ranges
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Number of samples applied before detach.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn is_detached(&self) -> bool {
        self.phase == TrackerPhase::Detached
    }

    /// Style for the current scroll position and ranges.
    pub fn style(&self) -> SectionStyle {
        SectionStyle {
            background_y: self.ranges.background_y(self.scroll_y),
            content_opacity: self.ranges.content_opacity(self.scroll_y),
        }
    }

    /// Apply a layout sample.
    ///
    /// The document offset is recomputed first; ranges are re-derived from it
    /// only when it is positive and a viewport height is known, either from
    /// the sample or from the last derivation. Otherwise the current ranges
    /// stay in place.
    pub fn observe(&mut self, sample: LayoutSample) -> GuideResult<SectionStyle> {
        if self.is_detached() {
            return Err(GuideError::Detached(self.id.clone()));
        }

        if sample.scroll_y.is_finite() {
            self.scroll_y = sample.scroll_y;
        }

        let offset = sample.document_offset();
        let viewport_height = sample.usable_viewport_height().or(match self.phase {
            TrackerPhase::RangesKnown {
                viewport_height, ..
            } => Some(viewport_height),
            _ => None,
        });
        let next = if offset > 0.0 {
            match viewport_height {
                Some(viewport_height) => {
                    self.ranges = ViewportRange::derive(offset, viewport_height, &self.factors);
                    TrackerPhase::RangesKnown {
                        offset,
                        viewport_height,
                    }
                }
                None => TrackerPhase::OffsetKnown { offset },
            }
        } else {
            self.phase
        };

        if mem::discriminant(&next) != mem::discriminant(&self.phase) {
            tracing::debug!(
                section = %self.id,
                event = ?sample.event,
                from = self.phase.label(),
                to = next.label(),
                "Section layout phase changed"
            );
        }
        self.phase = next;
        self.updates += 1;

        Ok(self.style())
    }

    /// Mark the section as unmounted. Idempotent.
    pub fn detach(&mut self) {
        if !self.is_detached() {
            tracing::debug!(section = %self.id, updates = self.updates, "Section tracker detached");
            self.phase = TrackerPhase::Detached;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(top: Option<f64>, scroll: f64, vh: Option<f64>) -> LayoutSample {
        LayoutSample::attach(top, scroll, vh)
    }

    #[test]
    fn starts_uninitialized_with_placeholders() {
        let t = SectionTracker::new("windows");
        assert_eq!(t.phase(), TrackerPhase::Uninitialized);
        assert_eq!(t.ranges(), ViewportRange::default());
    }

    #[test]
    fn unlaid_out_element_keeps_placeholders() {
        let mut t = SectionTracker::new("windows");
        t.observe(sample(None, 0.0, Some(900.0))).unwrap();
        assert_eq!(t.phase(), TrackerPhase::Uninitialized);
        assert_eq!(t.ranges(), ViewportRange::default());

        t.observe(sample(Some(0.0), 0.0, Some(900.0))).unwrap();
        assert_eq!(t.phase(), TrackerPhase::Uninitialized);
    }

    #[test]
    fn offset_without_viewport_height() {
        let mut t = SectionTracker::new("mac");
        t.observe(sample(Some(300.0), 200.0, None)).unwrap();
        assert_eq!(t.phase(), TrackerPhase::OffsetKnown { offset: 500.0 });
        assert_eq!(t.ranges(), ViewportRange::default());
    }

    #[test]
    fn full_transition_to_ranges_known() {
        let mut t = SectionTracker::new("mac");
        t.observe(sample(Some(300.0), 200.0, None)).unwrap();
        t.observe(sample(Some(300.0), 200.0, Some(1000.0)).with_event(LayoutEvent::Resize))
            .unwrap();
        assert_eq!(
            t.phase(),
            TrackerPhase::RangesKnown {
                offset: 500.0,
                viewport_height: 1000.0
            }
        );
        assert_eq!(
            t.ranges(),
            ViewportRange::derive(500.0, 1000.0, &RangeFactors::default())
        );
    }

    #[test]
    fn offset_change_without_height_uses_last_height() {
        let mut t = SectionTracker::new("controller");
        t.observe(sample(Some(1000.0), 0.0, Some(800.0))).unwrap();
        t.observe(sample(Some(1200.0), 0.0, None).with_event(LayoutEvent::Layout))
            .unwrap();
        assert_eq!(
            t.phase(),
            TrackerPhase::RangesKnown {
                offset: 1200.0,
                viewport_height: 800.0
            }
        );
        assert_eq!(
            t.ranges(),
            ViewportRange::derive(1200.0, 800.0, &RangeFactors::default())
        );
    }

    #[test]
    fn resize_rederives_ranges() {
        let mut t = SectionTracker::new("controller");
        t.observe(sample(Some(1000.0), 0.0, Some(800.0))).unwrap();
        let before = t.ranges();
        t.observe(sample(Some(1000.0), 0.0, Some(600.0)).with_event(LayoutEvent::Resize))
            .unwrap();
        assert_ne!(t.ranges(), before);
        assert_eq!(
            t.ranges(),
            ViewportRange::derive(1000.0, 600.0, &RangeFactors::default())
        );
    }

    #[test]
    fn content_shift_above_moves_offset() {
        let mut t = SectionTracker::new("troubleshooting");
        t.observe(sample(Some(1000.0), 0.0, Some(800.0))).unwrap();
        t.observe(sample(Some(1250.0), 0.0, Some(800.0)).with_event(LayoutEvent::Layout))
            .unwrap();
        assert_eq!(
            t.phase(),
            TrackerPhase::RangesKnown {
                offset: 1250.0,
                viewport_height: 800.0
            }
        );
    }

    #[test]
    fn scroll_updates_style() {
        let mut t = SectionTracker::new("windows");
        let first = t.observe(sample(Some(2000.0), 0.0, Some(1000.0))).unwrap();
        assert_eq!(first.content_opacity, 0.0);

        // Same document offset, scrolled so the section is centered
        let second = t
            .observe(sample(Some(200.0), 1800.0, Some(1000.0)).with_event(LayoutEvent::Scroll))
            .unwrap();
        assert_eq!(second.content_opacity, 1.0);
        assert!(second.background_y.abs() < 1e-6);
    }

    #[test]
    fn detach_rejects_further_samples() {
        let mut t = SectionTracker::new("windows");
        t.observe(sample(Some(500.0), 0.0, Some(900.0))).unwrap();
        let updates = t.updates();
        t.detach();
        t.detach();

        let err = t.observe(sample(Some(600.0), 100.0, Some(900.0))).unwrap_err();
        assert!(matches!(err, GuideError::Detached(ref id) if id == "windows"));
        assert_eq!(t.updates(), updates);
        assert_eq!(t.phase(), TrackerPhase::Detached);
    }

    #[test]
    fn sample_decodes_from_bridge_json() {
        let json = r#"{"event":"scroll","element_top":120.5,"scroll_y":40,"viewport_height":null}"#;
        let s: LayoutSample = serde_json::from_str(json).unwrap();
        assert_eq!(s.event, LayoutEvent::Scroll);
        assert_eq!(s.document_offset(), 160.5);
        assert_eq!(s.viewport_height, None);
    }

    #[test]
    fn style_css() {
        let style = SectionStyle {
            background_y: -12.5,
            content_opacity: 0.5,
        };
        assert_eq!(style.background_css(), "transform: translateY(-12.50px);");
        assert_eq!(style.content_css(), "opacity: 0.500;");
    }
}
