//! Step Card Components
//!
//! One card per step in a section's grid:
//! - Badge: round step number, red for the `!` warning marker
//! - Card: badge plus title and description, revealed with a staggered delay

use dioxus::prelude::*;
use dolphin_guide_core::{StepItem, StepLabel};

/// Seconds before the first card starts its entrance animation
pub const REVEAL_BASE_DELAY: f64 = 0.2;

/// Extra delay per card position
pub const REVEAL_STAGGER: f64 = 0.08;

/// Entrance delay for the card at `index`, in seconds.
pub fn reveal_delay(index: usize) -> f64 {
    REVEAL_STAGGER * index as f64 + REVEAL_BASE_DELAY
}

/// Returns the CSS class for a step badge
pub fn badge_class(label: StepLabel) -> &'static str {
    if label.is_warning() {
        "step-badge warning"
    } else {
        "step-badge"
    }
}

#[component]
pub fn StepBadge(label: StepLabel) -> Element {
    rsx! {
        div { class: badge_class(label), "{label}" }
    }
}

/// Properties for the StepCard component
#[derive(Clone, PartialEq, Props)]
pub struct StepCardProps {
    pub item: StepItem,
    /// Position within the section, drives the reveal delay
    pub index: usize,
}

/// A single step card.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, (key, item)) in section.keyed_steps().enumerate() {
///         StepCard { key: "{key}", item: *item, index: i }
///     }
/// }
/// ```
#[component]
pub fn StepCard(props: StepCardProps) -> Element {
    let delay = format!("{:.2}s", reveal_delay(props.index));

    rsx! {
        div {
            class: "step-card",
            style: "animation-delay: {delay};",
            div { class: "step-card-body",
                StepBadge { label: props.item.step }
                div {
                    h3 { class: "step-title", "{props.item.title}" }
                    p { class: "step-description", "{props.item.description}" }
                }
            }
        }
    }
}
