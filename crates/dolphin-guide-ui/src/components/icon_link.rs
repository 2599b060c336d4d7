//! External icon link (footer).

use dioxus::prelude::*;

use crate::components::icons::{GuideIcon, Icon};

/// Properties for the IconLink component
#[derive(Clone, PartialEq, Props)]
pub struct IconLinkProps {
    /// External URL, opened in a new window
    pub href: String,
    pub icon: GuideIcon,
    /// Used for both `aria-label` and the hover title
    pub label: String,
}

/// Icon-only link to an external site.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconLink {
///         href: "https://github.com/dolphin-emu/dolphin".to_string(),
///         icon: GuideIcon::Github,
///         label: "GitHub".to_string(),
///     }
/// }
/// ```
#[component]
pub fn IconLink(props: IconLinkProps) -> Element {
    rsx! {
        a {
            class: "icon-link",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "aria-label": "{props.label}",
            title: "{props.label}",
            div { class: "icon-link-glyph",
                Icon { icon: props.icon, size: 20 }
            }
        }
    }
}
