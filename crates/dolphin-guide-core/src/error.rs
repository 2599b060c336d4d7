//! Error types for Dolphin Guide

use thiserror::Error;

/// Main error type for the guide's DOM bridge and tracker
#[derive(Error, Debug)]
pub enum GuideError {
    /// JavaScript evaluation in the webview failed or the channel closed
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// A message from the webview could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No element with the requested anchor id exists in the document
    #[error("Anchor not found: #{0}")]
    AnchorNotFound(String),

    /// A layout sample arrived after the section was unmounted
    #[error("Section detached: {0}")]
    Detached(String),
}

/// Result type alias using GuideError
pub type GuideResult<T> = Result<T, GuideError>;
