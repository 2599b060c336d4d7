//! Home page - the whole guide.
//!
//! Header, intro panel, one parallax section per catalog entry, footer.

use dioxus::prelude::*;
use dolphin_guide_core::SECTIONS;

use crate::components::{Footer, Header, ParallaxSection};
use crate::context::SECTIONS_CONTAINER_ID;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "guide",
            Header {}

            div { class: "intro",
                div { class: "intro-panel",
                    h2 { class: "intro-title", "Dolphin: GameCube & Wii Emulator" }
                    p { class: "intro-text",
                        "Dolphin emulates Nintendo's GameCube and Wii consoles. The GameCube hosted classics "
                        em { class: "game-title", "Super Smash Bros. Melee" }
                        " and "
                        em { class: "game-title", "Metroid Prime" }
                        ". The Wii changed history with motion controls, bringing hits like "
                        em { class: "game-title", "Wii Sports" }
                        " and "
                        em { class: "game-title", "Super Mario Galaxy" }
                        ". Dolphin lets you experience these platforms on modern PCs and Android."
                    }
                }
            }

            div { id: SECTIONS_CONTAINER_ID, class: "sections",
                for (index, section) in SECTIONS.iter().enumerate() {
                    ParallaxSection {
                        key: "{section.id}",
                        section: section,
                        index: index,
                        container_id: SECTIONS_CONTAINER_ID,
                    }
                }
            }

            Footer {}
        }
    }
}
