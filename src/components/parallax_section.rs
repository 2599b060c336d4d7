//! Parallax Section Component
//!
//! A full-viewport section whose background drifts against the scroll
//! direction while its content fades in and out. Layout samples arrive through
//! the section's own [`SectionFeed`]; the feed is closed when the section
//! unmounts.

use std::rc::Rc;

use dioxus::prelude::*;
use dolphin_guide_core::{ContentSection, GuideError, SectionTracker};
use dolphin_guide_ui::StepCard;

use crate::bridge::{use_reveal, SectionFeed};

/// Stacking base: earlier sections sit above later ones.
const Z_INDEX_BASE: i32 = 10;

/// Visible fraction of a section that starts its entrance animations.
const REVEAL_AMOUNT: f64 = 0.2;

#[derive(Props, Clone, PartialEq)]
pub struct ParallaxSectionProps {
    pub section: &'static ContentSection,
    /// Position in the page; only affects stacking order
    pub index: usize,
    /// DOM id of the element wrapping all sections
    pub container_id: &'static str,
}

/// One guide section with its background, overlay and step grid.
#[component]
pub fn ParallaxSection(props: ParallaxSectionProps) -> Element {
    let section = props.section;
    let container_id = props.container_id;

    let feed = use_hook(move || match SectionFeed::attach(section.id, container_id) {
        Ok(feed) => Some(Rc::new(feed)),
        Err(e) => {
            tracing::warn!(section = section.id, error = %e, "Layout feed unavailable");
            None
        }
    });

    // Placeholder ranges until the first sample arrives
    let initial_feed = feed.clone();
    let mut style = use_signal(move || match initial_feed {
        Some(feed) => feed.style(),
        None => SectionTracker::new(section.id).style(),
    });

    // Apply layout samples until the feed closes
    let task_feed = feed.clone();
    use_future(move || {
        let feed = task_feed.clone();
        async move {
            let Some(feed) = feed else { return };
            loop {
                match feed.next_style().await {
                    Ok(next) => {
                        if *style.peek() != next {
                            style.set(next);
                        }
                    }
                    Err(GuideError::Detached(_)) => break,
                    Err(e) => {
                        tracing::debug!(section = section.id, error = %e, "Layout feed ended");
                        break;
                    }
                }
            }
        }
    });

    use_drop(move || {
        if let Some(feed) = &feed {
            feed.close();
        }
    });

    let revealed = use_reveal(section.id, REVEAL_AMOUNT);

    let current = style();
    let z_index = Z_INDEX_BASE - props.index as i32;
    let background_css = format!(
        "background-image: url('{}'); {}",
        section.bg,
        current.background_css()
    );
    let content_css = current.content_css();
    let section_class = if revealed() {
        "parallax-section revealed"
    } else {
        "parallax-section"
    };

    rsx! {
        section {
            id: "{section.id}",
            class: "{section_class}",
            style: "z-index: {z_index};",

            div { class: "parallax-bg", style: "{background_css}" }
            div { class: "parallax-overlay" }

            div { class: "parallax-content", style: "{content_css}",
                div { class: "section-heading",
                    h2 { class: "section-title", "{section.title}" }
                    div { class: "section-rule" }
                }

                div { class: "step-grid",
                    for (i, (key, item)) in section.keyed_steps().enumerate() {
                        StepCard { key: "{key}", item: *item, index: i }
                    }
                }
            }
        }
    }
}
