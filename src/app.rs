use dioxus::prelude::*;

use crate::context::GuideConfig;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the guide configuration, then renders the page.
#[component]
pub fn App() -> Element {
    use_context_provider::<GuideConfig>(crate::get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
