//! Configuration types.

use std::time::Duration;

/// Tour engine configuration.
#[derive(Debug, Clone)]
pub struct TourConfig {
    /// Namespace prefix for preference keys, e.g. `"file-manager"`.
    pub namespace: String,
    /// How long the completion celebration is allowed to play before teardown.
    pub celebration_settle: Duration,
    /// DOM id of the element popups are mounted into, if the host provides one.
    pub steps_container_id: Option<String>,
    /// Whether the renderer should dim the rest of the page behind the tour.
    pub use_modal_overlay: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            namespace: "file-manager".to_string(),
            celebration_settle: Duration::from_secs(5),
            steps_container_id: Some("tour-container".to_string()),
            use_modal_overlay: true,
        }
    }
}

impl TourConfig {
    /// Preference key under which the dismissal flag is stored.
    pub fn dismissal_key(&self) -> String {
        format!("{}/tour-dismissed", self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TourConfig::default();
        assert_eq!(config.namespace, "file-manager");
        assert_eq!(config.celebration_settle, Duration::from_secs(5));
        assert_eq!(config.steps_container_id.as_deref(), Some("tour-container"));
        assert!(config.use_modal_overlay);
    }

    #[test]
    fn dismissal_key_uses_namespace() {
        let config = TourConfig {
            namespace: "acme-files".to_string(),
            ..Default::default()
        };
        assert_eq!(config.dismissal_key(), "acme-files/tour-dismissed");
    }
}
