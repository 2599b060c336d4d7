//! In-page navigation.
//!
//! A nav link measures its target through the DOM bridge, which reports a
//! [`ScrollProbe`]. The destination puts the target's top just below the
//! fixed header: `target top - header height - margin`.

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};

/// Header height assumed when the header element cannot be measured.
pub const DEFAULT_HEADER_HEIGHT: f64 = 60.0;

/// Extra gap between the header's bottom edge and the target's top.
pub const DEFAULT_NAV_MARGIN: f64 = 30.0;

/// Header navigation entries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavTarget {
    Windows,
    Mac,
    Controller,
    Troubleshooting,
}

impl NavTarget {
    pub const ALL: [NavTarget; 4] = [
        NavTarget::Windows,
        NavTarget::Mac,
        NavTarget::Controller,
        NavTarget::Troubleshooting,
    ];

    /// Element id the link scrolls to
    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::Windows => "windows",
            NavTarget::Mac => "mac",
            NavTarget::Controller => "controller",
            NavTarget::Troubleshooting => "troubleshooting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Windows => "Windows",
            NavTarget::Mac => "macOS",
            NavTarget::Controller => "Controls",
            NavTarget::Troubleshooting => "Troubleshoot",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Measurements taken in the webview when a nav link is activated.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ScrollProbe {
    /// Target top relative to the document body; `None` if no such element
    pub target_top: Option<f64>,
    /// Rendered header height (`offsetHeight`)
    pub header_height: Option<f64>,
}

impl ScrollProbe {
    /// Header height, falling back to [`DEFAULT_HEADER_HEIGHT`] for a missing
    /// or zero-height header.
    pub fn header_height(&self) -> f64 {
        self.header_height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(DEFAULT_HEADER_HEIGHT)
    }

    /// Scroll destination for `anchor`.
    ///
    /// Returns [`GuideError::AnchorNotFound`] when the target is absent; the
    /// caller treats that as a no-op.
    pub fn destination(&self, anchor: &str, margin: f64) -> GuideResult<f64> {
        let target_top = self
            .target_top
            .filter(|t| t.is_finite())
            .ok_or_else(|| GuideError::AnchorNotFound(anchor.to_string()))?;
        Ok(target_top - (self.header_height() + margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::section_by_id;

    #[test]
    fn nav_targets_exist_in_catalog() {
        for target in NavTarget::ALL {
            assert!(
                section_by_id(target.anchor()).is_some(),
                "missing section for {}",
                target.href()
            );
        }
    }

    #[test]
    fn nav_labels() {
        let labels: Vec<_> = NavTarget::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Windows", "macOS", "Controls", "Troubleshoot"]);
        assert_eq!(NavTarget::Mac.href(), "#mac");
    }

    #[test]
    fn destination_subtracts_header_and_margin() {
        let probe = ScrollProbe {
            target_top: Some(1500.0),
            header_height: Some(72.0),
        };
        assert_eq!(probe.destination("windows", DEFAULT_NAV_MARGIN).unwrap(), 1398.0);
    }

    #[test]
    fn header_fallback() {
        let probe = ScrollProbe {
            target_top: Some(1000.0),
            header_height: None,
        };
        assert_eq!(probe.destination("mac", 30.0).unwrap(), 910.0);

        let zero = ScrollProbe {
            target_top: Some(1000.0),
            header_height: Some(0.0),
        };
        assert_eq!(zero.header_height(), DEFAULT_HEADER_HEIGHT);
    }

    #[test]
    fn missing_target_is_anchor_not_found() {
        let probe = ScrollProbe::default();
        let err = probe.destination("linux", 30.0).unwrap_err();
        assert!(matches!(err, GuideError::AnchorNotFound(ref a) if a == "linux"));
    }

    #[test]
    fn probe_decodes_null_target() {
        let probe: ScrollProbe =
            serde_json::from_str(r#"{"target_top":null,"header_height":64}"#).unwrap();
        assert_eq!(probe.target_top, None);
        assert_eq!(probe.header_height(), 64.0);
    }
}
