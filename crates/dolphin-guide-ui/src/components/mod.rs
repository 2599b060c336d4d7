//! Reusable UI components.
//!
//! Class names refer to the global stylesheet shipped by the desktop app.

mod icon_link;
mod icons;
mod step_card;

pub use icon_link::*;
pub use icons::*;
pub use step_card::*;
