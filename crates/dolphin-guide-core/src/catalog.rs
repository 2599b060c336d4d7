//! Static content catalog.
//!
//! The guide's sections are authored here once and never mutated. The page
//! renders them in slice order, one parallax section per entry and one step
//! card per [`StepItem`].

use std::fmt;

use serde::{Serialize, Serializer};

/// Label shown in a step's badge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepLabel {
    /// Ordinal step number
    Number(u8),
    /// Sentinel `!` marker, rendered with warning styling
    Warning,
}

impl StepLabel {
    /// Whether this label uses the warning badge style
    pub fn is_warning(&self) -> bool {
        matches!(self, StepLabel::Warning)
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepLabel::Number(n) => write!(f, "{}", n),
            StepLabel::Warning => f.write_str("!"),
        }
    }
}

impl Serialize for StepLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StepLabel::Number(n) => serializer.serialize_u8(*n),
            StepLabel::Warning => serializer.serialize_str("!"),
        }
    }
}

/// One step card inside a section.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct StepItem {
    pub step: StepLabel,
    pub title: &'static str,
    pub description: &'static str,
}

/// A full-viewport section of the guide.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ContentSection {
    /// Anchor id (`#windows`) and list key
    pub id: &'static str,
    pub title: &'static str,
    /// Background image path, resolved by the host's static asset serving
    pub bg: &'static str,
    pub content: &'static [StepItem],
}

impl ContentSection {
    /// Render key for a step: `"{section id}-{step label}"`.
    pub fn step_key(&self, item: &StepItem) -> String {
        format!("{}-{}", self.id, item.step)
    }

    /// Steps paired with their render keys, in authored order.
    pub fn keyed_steps(&self) -> impl Iterator<Item = (String, &'static StepItem)> + '_ {
        self.content.iter().map(move |item| (self.step_key(item), item))
    }
}

const fn step(n: u8, title: &'static str, description: &'static str) -> StepItem {
    StepItem {
        step: StepLabel::Number(n),
        title,
        description,
    }
}

const fn warning(title: &'static str, description: &'static str) -> StepItem {
    StepItem {
        step: StepLabel::Warning,
        title,
        description,
    }
}

/// All sections in page order.
pub static SECTIONS: &[ContentSection] = &[
    ContentSection {
        id: "windows",
        title: "Windows Setup",
        bg: "/images/windows.png",
        content: &[
            step(1, "Download Dolphin", "Visit dolphin-emu.org >> Download latest dev build (Win x64)."),
            step(2, "Extract Files", "Unzip archive >> Place folder (e.g., C:\\Emulators\\Dolphin\\)."),
            step(3, "Configure Dolphin", "Run Dolphin.exe >> Set Graphics (Direct3D/Vulkan) & Controllers."),
            step(4, "Add Games", "Config > Paths > Add... >> Select game file directory (ISO/GCM/etc)."),
            step(5, "Launch!", "Double-click game >> Alt+Enter (Fullscreen) >> Esc (Stop)."),
        ],
    },
    ContentSection {
        id: "mac",
        title: "macOS Setup",
        bg: "/images/apple.png",
        content: &[
            step(1, "Download Dolphin", "Visit dolphin-emu.org >> Grab macOS Universal .DMG."),
            step(2, "Install", "Open .DMG >> Drag Dolphin.app to Applications folder."),
            step(3, "Launch", "Open Dolphin >> Security warning? Ctrl+Click > \"Open\"."),
            step(4, "Configure", "Setup Graphics (Metal recommended) & Controllers via Preferences."),
            step(5, "Add Games", "Set game paths >> Tweak game-specific settings if needed."),
        ],
    },
    ContentSection {
        id: "controller",
        title: "Controller Setup",
        bg: "/images/wiimote.png",
        content: &[
            step(1, "GameCube Input", "Use official/third-party USB GC Adapter or map standard controller."),
            step(2, "Wii Remote Input", "Map standard controller as emulated Wiimote OR connect real Wiimotes (Bluetooth)."),
            step(3, "Motion Controls", "Requires real Wiimotes OR map motion to analog sticks/gyro (if available)."),
        ],
    },
    ContentSection {
        id: "troubleshooting",
        title: "Troubleshooting",
        bg: "/images/troubleshooting-bg.jpg",
        content: &[
            step(1, "Performance Issues", "Lower Internal Res >> Enable \"Performance\" mode >> Use Hybrid Ubershaders."),
            step(2, "Game-Specific Fixes", "Consult the Dolphin Wiki (wiki.dolphin-emu.org) for game compatibility & settings."),
            warning("Newer macOS Warning", "Dolphin may struggle on recent macOS versions due to blocks from Apple. Consider running on Windows."),
        ],
    },
];

/// Look up a section by its anchor id.
pub fn section_by_id(id: &str) -> Option<&'static ContentSection> {
    SECTIONS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sections_in_page_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["windows", "mac", "controller", "troubleshooting"]);
    }

    #[test]
    fn step_counts_match_authored_content() {
        let counts: Vec<_> = SECTIONS.iter().map(|s| s.content.len()).collect();
        assert_eq!(counts, [5, 5, 3, 3]);
    }

    #[test]
    fn keyed_steps_preserve_order_one_per_item() {
        for section in SECTIONS {
            let keyed: Vec<_> = section.keyed_steps().collect();
            assert_eq!(keyed.len(), section.content.len());
            for ((_, item), authored) in keyed.iter().zip(section.content) {
                assert_eq!(*item, authored);
            }
        }
    }

    #[test]
    fn step_keys_unique_across_catalog() {
        let mut seen = HashSet::new();
        for section in SECTIONS {
            for (key, _) in section.keyed_steps() {
                assert!(seen.insert(key.clone()), "duplicate key {}", key);
            }
        }
    }

    #[test]
    fn warning_step_label() {
        let trouble = section_by_id("troubleshooting").unwrap();
        let last = trouble.content.last().unwrap();
        assert!(last.step.is_warning());
        assert_eq!(last.step.to_string(), "!");
        assert_eq!(trouble.step_key(last), "troubleshooting-!");
    }

    #[test]
    fn section_lookup() {
        assert_eq!(section_by_id("mac").map(|s| s.title), Some("macOS Setup"));
        assert!(section_by_id("linux").is_none());
    }

    #[test]
    fn catalog_serializes_labels() {
        let json = serde_json::to_value(section_by_id("troubleshooting").unwrap()).unwrap();
        assert_eq!(json["content"][0]["step"], 1);
        assert_eq!(json["content"][2]["step"], "!");
        assert_eq!(json["bg"], "/images/troubleshooting-bg.jpg");
    }
}
