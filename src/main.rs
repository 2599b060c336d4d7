#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use dolphin_guide_core::{logging, SECTIONS};

use crate::context::GuideConfig;

/// Global configuration, set from command line
static CONFIG: OnceLock<GuideConfig> = OnceLock::new();

/// Get the configuration (set from command line or default)
pub fn get_config() -> GuideConfig {
    CONFIG.get().copied().unwrap_or_default()
}

/// Dolphin Guide - GameCube & Wii emulator setup guide
#[derive(Parser, Debug)]
#[command(name = "dolphin-guide")]
#[command(about = "Dolphin_Guide.exe - setup guide for the Dolphin GameCube & Wii emulator")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Gap between the header and a section when jumping via the nav links
    #[arg(long, default_value_t = dolphin_guide_core::DEFAULT_NAV_MARGIN)]
    nav_margin: f64,

    /// Print the content catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.dump_catalog {
        match serde_json::to_string_pretty(SECTIONS) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize catalog: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = GuideConfig {
        window_width: args.width,
        window_height: args.height,
        nav_margin: args.nav_margin,
    };
    let _ = CONFIG.set(config);

    tracing::info!(
        sections = SECTIONS.len(),
        width = config.window_width,
        height = config.window_height,
        "Starting Dolphin Guide"
    );

    // Configure desktop window
    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Dolphin_Guide.exe")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);
}
