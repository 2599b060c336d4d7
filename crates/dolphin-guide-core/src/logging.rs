//! Console logging setup.
//!
//! `RUST_LOG` always wins. Without it, the level comes from the number of
//! `-v` flags passed to the binary.
//!
//! ```bash
//! # Watch section layout transitions
//! RUST_LOG=dolphin_guide_core=debug dolphin-guide
//!
//! # Same thing via verbosity
//! dolphin-guide -vv
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the env filter used by [`init`].
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)))
}

/// Install the global fmt subscriber. Returns `false` if one was already set.
pub fn init(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .try_init()
        .is_ok()
}
