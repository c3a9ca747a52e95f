//! Step definitions — the author-supplied tour content.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// Where the step popup sits relative to its anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    #[default]
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        };
        write!(f, "{s}")
    }
}

/// Visual weight of a step button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    Primary,
    Secondary,
}

/// The closed set of things a step button can do.
///
/// Actions are named rather than closures so they can be resolved against
/// the *current* session when the button is pressed, instead of capturing a
/// session reference at authoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    Next,
    Previous,
    SkipAndDismiss,
    FinishAndDismiss,
}

/// A button rendered in a step popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepButton {
    pub label: String,
    pub role: ButtonRole,
    pub action: StepAction,
}

impl StepButton {
    pub fn primary(label: impl Into<String>, action: StepAction) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Primary,
            action,
        }
    }

    pub fn secondary(label: impl Into<String>, action: StepAction) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Secondary,
            action,
        }
    }
}

/// The standard Previous/Next pair used when a step declares no buttons.
pub fn default_buttons() -> Vec<StepButton> {
    vec![
        StepButton::secondary("Previous", StepAction::Previous),
        StepButton::primary("Next", StepAction::Next),
    ]
}

/// A side-effecting step lifecycle hook.
///
/// Hooks run when the renderer shows or hides the step, typically to nudge
/// application state in lockstep with the tour (e.g. synthesize a click on
/// the anchor so the panel the next step points at is open). They must be
/// idempotent; an `Err` is logged and swallowed, never aborting the tour.
pub type StepHook = Arc<dyn Fn() -> Result<(), HookError> + Send + Sync>;

/// One authored stop in the walkthrough. Immutable at runtime.
#[derive(Clone, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable identifier; the anchor element carries `data-tour="<key>"`.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Rich-text body shown in the popup.
    pub label: String,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_classes: Option<String>,
    /// Empty means "use the default Previous/Next pair".
    #[serde(default)]
    pub buttons: Vec<StepButton>,
    #[serde(skip)]
    pub on_show: Option<StepHook>,
    #[serde(skip)]
    pub on_hide: Option<StepHook>,
    /// Warm the celebration effect's assets before this step displays.
    #[serde(default)]
    pub preload_celebration: bool,
}

impl StepDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            label: label.into(),
            placement: Placement::default(),
            extra_classes: None,
            buttons: Vec::new(),
            on_show: None,
            on_hide: None,
            preload_celebration: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_extra_classes(mut self, classes: impl Into<String>) -> Self {
        self.extra_classes = Some(classes.into());
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<StepButton>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_on_show(mut self, hook: StepHook) -> Self {
        self.on_show = Some(hook);
        self
    }

    pub fn with_on_hide(mut self, hook: StepHook) -> Self {
        self.on_hide = Some(hook);
        self
    }

    pub fn with_celebration_preload(mut self) -> Self {
        self.preload_celebration = true;
        self
    }

    /// CSS selector locating this step's anchor element.
    pub fn selector(&self) -> String {
        format!("[data-tour=\"{}\"]", self.key)
    }
}

// Hooks are opaque closures, so Debug is by hand.
impl std::fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("label", &self.label)
            .field("placement", &self.placement)
            .field("extra_classes", &self.extra_classes)
            .field("buttons", &self.buttons)
            .field("on_show", &self.on_show.is_some())
            .field("on_hide", &self.on_hide.is_some())
            .field("preload_celebration", &self.preload_celebration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_follows_anchor_convention() {
        let step = StepDefinition::new("create-folder", "Make a folder");
        assert_eq!(step.selector(), "[data-tour=\"create-folder\"]");
    }

    #[test]
    fn placement_defaults_to_bottom_start() {
        let step = StepDefinition::new("k", "l");
        assert_eq!(step.placement, Placement::BottomStart);
    }

    #[test]
    fn placement_display_matches_serde() {
        let placements = [
            Placement::Top,
            Placement::TopStart,
            Placement::TopEnd,
            Placement::Bottom,
            Placement::BottomStart,
            Placement::BottomEnd,
            Placement::Left,
            Placement::LeftStart,
            Placement::LeftEnd,
            Placement::Right,
            Placement::RightStart,
            Placement::RightEnd,
        ];
        for placement in placements {
            let display = format!("{placement}");
            let json = serde_json::to_string(&placement).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }

    #[test]
    fn default_buttons_are_previous_then_next() {
        let buttons = default_buttons();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "Previous");
        assert_eq!(buttons[0].role, ButtonRole::Secondary);
        assert_eq!(buttons[0].action, StepAction::Previous);
        assert_eq!(buttons[1].label, "Next");
        assert_eq!(buttons[1].role, ButtonRole::Primary);
        assert_eq!(buttons[1].action, StepAction::Next);
    }

    #[test]
    fn serde_skips_hooks() {
        let step = StepDefinition::new("upload", "Drop files here")
            .with_title("Uploads")
            .with_on_show(Arc::new(|| Ok(())))
            .with_celebration_preload();

        let json = serde_json::to_string(&step).unwrap();
        assert!(!json.contains("on_show"));

        let parsed: StepDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.key, "upload");
        assert_eq!(parsed.title.as_deref(), Some("Uploads"));
        assert!(parsed.preload_celebration);
        assert!(parsed.on_show.is_none());
    }

    #[test]
    fn step_action_wire_form() {
        let json = serde_json::to_string(&StepAction::SkipAndDismiss).unwrap();
        assert_eq!(json, "\"skip_and_dismiss\"");
    }
}
