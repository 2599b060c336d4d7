//! Header Component
//!
//! Fixed top bar: terminal logo (scrolls to top) and in-page nav links that
//! smooth-scroll to their section, leaving room for the header itself.

use dioxus::prelude::*;
use dolphin_guide_core::NavTarget;
use dolphin_guide_ui::{GuideIcon, Icon};

use crate::bridge::{scroll_to_anchor, smooth_scroll_to};
use crate::context::use_config;

/// Fixed page header with logo and navigation.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                // Logo/Title
                div {
                    class: "site-logo",
                    onclick: move |_| smooth_scroll_to(0.0),
                    div { class: "site-logo-icon",
                        Icon { icon: GuideIcon::Terminal, size: 14 }
                    }
                    h1 { class: "site-title",
                        "Dolphin_Guide"
                        span { class: "site-title-ext", ".exe" }
                    }
                }

                nav { class: "site-nav",
                    ul {
                        for target in NavTarget::ALL {
                            NavLink { key: "{target.anchor()}", target: target }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    pub target: NavTarget,
}

/// Nav entry that smooth-scrolls to its section instead of jumping.
#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    let config = use_config();
    let target = props.target;
    let href = target.href();

    let onclick = move |evt: MouseEvent| {
        evt.prevent_default();
        let margin = config.nav_margin;
        spawn(async move {
            scroll_to_anchor(target.anchor(), margin).await;
        });
    };

    rsx! {
        li { class: "nav-item",
            a {
                class: "nav-link",
                href: "{href}",
                onclick: onclick,
                "{target.label()}"
            }
        }
    }
}
