//! Dolphin Guide UI Components
//!
//! This crate provides Dioxus UI components for the guide's terminal
//! aesthetic: black backgrounds, green monospace text, thin green borders.
//!
//! ## Palette
//!
//! - **Green 300 (#86efac)**: Titles and hovered links
//! - **Green 400 (#4ade80)**: Body text and badges
//! - **Green 800 (#166534)**: Borders and rules
//! - **Red 400 (#f87171)**: Warning badges

pub mod components;

pub use components::*;
