//! DOM presence seam — "does an element matching this selector exist".
//!
//! The probe runs once per `initialize()`, at plan-build time. It is never
//! re-evaluated during playback; if an anchor disappears mid-tour the
//! renderer's own target-resolution fallback takes over.

use std::collections::HashSet;

/// A pure presence test against the current document.
pub trait AnchorQuery: Send + Sync {
    fn anchor_exists(&self, selector: &str) -> bool;
}

/// A fixed set of present selectors, for tests and server-side rendering.
#[derive(Debug, Default)]
pub struct StaticAnchors {
    present: HashSet<String>,
}

impl StaticAnchors {
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Convenience: build from bare `data-tour` keys instead of full selectors.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            keys.into_iter()
                .map(|k| format!("[data-tour=\"{}\"]", k.as_ref())),
        )
    }
}

impl AnchorQuery for StaticAnchors {
    fn anchor_exists(&self, selector: &str) -> bool {
        self.present.contains(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_anchors_presence() {
        let anchors = StaticAnchors::new(["[data-tour=\"search\"]"]);
        assert!(anchors.anchor_exists("[data-tour=\"search\"]"));
        assert!(!anchors.anchor_exists("[data-tour=\"upload\"]"));
    }

    #[test]
    fn from_keys_builds_selectors() {
        let anchors = StaticAnchors::from_keys(["search", "upload"]);
        assert!(anchors.anchor_exists("[data-tour=\"search\"]"));
        assert!(anchors.anchor_exists("[data-tour=\"upload\"]"));
        assert!(!anchors.anchor_exists("search"));
    }
}
