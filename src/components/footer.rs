//! Footer Component
//!
//! Title, disclaimer with the current year, and external links. Fades in the
//! first time it scrolls into view.

use chrono::Datelike;
use dioxus::prelude::*;
use dolphin_guide_ui::{GuideIcon, Icon, IconLink};

use crate::bridge::use_reveal;

const FOOTER_ID: &str = "footer";

/// Visible fraction of the footer that starts its fade-in.
const REVEAL_AMOUNT: f64 = 0.1;

/// External links shown in the footer: (url, icon, label)
pub const FOOTER_LINKS: [(&str, GuideIcon, &str); 3] = [
    ("https://dolphin-emu.org/", GuideIcon::Dolphin, "Official Dolphin Site"),
    ("https://github.com/dolphin-emu/dolphin", GuideIcon::Github, "GitHub"),
    ("https://discord.gg/dolphin-emu", GuideIcon::Discord, "Discord"),
];

/// Disclaimer line for the given year.
pub fn disclaimer(year: i32) -> String {
    format!("Unofficial guide // For informational purposes only // {}", year)
}

#[component]
pub fn Footer() -> Element {
    let note = disclaimer(chrono::Local::now().year());
    let revealed = use_reveal(FOOTER_ID, REVEAL_AMOUNT);
    let class = if revealed() { "site-footer revealed" } else { "site-footer" };

    rsx! {
        footer { id: FOOTER_ID, class: "{class}",
            div { class: "site-footer-inner",
                div { class: "footer-brand",
                    div { class: "footer-title-row",
                        Icon { icon: GuideIcon::Terminal, size: 20, class: "footer-icon".to_string() }
                        h2 { class: "footer-title", "Dolphin_Guide" }
                    }
                    p { class: "footer-disclaimer", "{note}" }
                }

                div { class: "footer-links",
                    for (href, icon, label) in FOOTER_LINKS {
                        IconLink {
                            key: "{label}",
                            href: href.to_string(),
                            icon: icon,
                            label: label.to_string(),
                        }
                    }
                }
            }
        }
    }
}
