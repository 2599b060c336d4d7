//! Inline Lucide icons.

use dioxus::prelude::*;

/// Icons used by the header and footer
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuideIcon {
    /// Terminal prompt, used as the site logo
    Terminal,
    /// Dolphin project site
    Dolphin,
    Github,
    Discord,
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub icon: GuideIcon,
    #[props(default = 18)]
    pub size: u32,
    #[props(default)]
    pub class: Option<String>,
}

/// Render a Lucide icon as inline SVG using `currentColor`.
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size.to_string();
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(props.icon)}
        }
    }
}

fn icon_paths(icon: GuideIcon) -> Element {
    match icon {
        GuideIcon::Terminal => rsx! {
            polyline { points: "4 17 10 11 4 5" }
            line { x1: "12", x2: "20", y1: "19", y2: "19" }
        },
        GuideIcon::Dolphin => rsx! {
            // Lucide fish
            path { d: "M6.5 12c.94-3.46 4.94-6 8.5-6 3.56 0 6.06 2.54 7 6-.94 3.47-3.44 6-7 6s-7.56-2.53-8.5-6Z" }
            path { d: "M18 12v.5" }
            path { d: "M16 17.93a9.77 9.77 0 0 1 0-11.86" }
            path { d: "M7 10.67C7 8 5.58 5.97 2.73 5.5c-1 1.5-1 5 .23 6.5-1.24 1.5-1.24 5-.23 6.5C5.58 18.03 7 16 7 13.33" }
            path { d: "M10.46 7.26C10.2 5.88 9.17 4.24 8 3h5.8a2 2 0 0 1 1.98 1.67l.23 1.4" }
            path { d: "m16.01 17.93-.23 1.4A2 2 0 0 1 13.8 21H9.5a5.96 5.96 0 0 0 1.49-3.98" }
        },
        GuideIcon::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        GuideIcon::Discord => rsx! {
            // Lucide message-circle
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
    }
}
