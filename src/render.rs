//! Tour renderer seam and the presentation types handed across it.
//!
//! The renderer owns everything visual: highlight box, popup positioning,
//! overlay, advancing on user input. The orchestrator gives it a
//! [`RenderPlan`] and an observer to call back at lifecycle points; it gets
//! an opaque [`RendererHandle`] back for programmatic navigation and
//! teardown.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::TourConfig;
use crate::error::RenderError;
use crate::tour::model::{Placement, StepButton, StepDefinition, default_buttons};

/// A renderer-ready step: presentation only, no hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStep {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTML body of the popup.
    pub body_markup: String,
    pub anchor_selector: String,
    pub placement: Placement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_classes: Option<String>,
    pub buttons: Vec<StepButton>,
    pub arrow: bool,
    pub scroll_to: bool,
}

/// The ordered, filtered sequence handed to the renderer for one playthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    pub use_modal_overlay: bool,
    pub steps: Vec<RenderStep>,
}

impl RenderPlan {
    /// Build the presentation sequence for an already-filtered step list.
    pub fn from_steps(config: &TourConfig, steps: &[StepDefinition]) -> Self {
        Self {
            container_id: config.steps_container_id.clone(),
            use_modal_overlay: config.use_modal_overlay,
            steps: steps.iter().map(RenderStep::from_definition).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl RenderStep {
    pub fn from_definition(step: &StepDefinition) -> Self {
        let buttons = if step.buttons.is_empty() {
            default_buttons()
        } else {
            step.buttons.clone()
        };
        Self {
            id: step.key.clone(),
            title: step.title.clone(),
            body_markup: body_markup(&step.label),
            anchor_selector: step.selector(),
            placement: step.placement,
            style_classes: step.extra_classes.clone(),
            buttons,
            arrow: false,
            scroll_to: false,
        }
    }
}

/// Wrap a step label in the standard popup body row (lightbulb badge + text).
fn body_markup(label: &str) -> String {
    format!(
        "<div class=\"gap-2 flex flex-row items-center\">\
         <span class=\"mr-2 flex-shrink-0 rounded-lg bg-indigo-900/60 p-2\">💡</span>\
         {label}</div>"
    )
}

/// Lifecycle callbacks the renderer fires back into the orchestrator.
#[async_trait]
pub trait TourObserver: Send + Sync {
    /// A step is about to display. Fired before any layout happens.
    async fn before_show(&self, key: &str);

    /// A step became visible.
    async fn step_shown(&self, key: &str);

    /// A step was hidden (navigation away or teardown).
    async fn step_hidden(&self, key: &str);

    /// The tour reached its terminal event, via Finish or Skip.
    async fn tour_complete(&self);
}

/// The external tour rendering engine.
#[async_trait]
pub trait TourRenderer: Send + Sync {
    /// Start playback at step 0. The renderer keeps the observer for the
    /// lifetime of the playthrough and fires it at each lifecycle point.
    async fn start(
        &self,
        plan: RenderPlan,
        observer: Arc<dyn TourObserver>,
    ) -> Result<Box<dyn RendererHandle>, RenderError>;
}

/// Handle to a running renderer instance.
#[async_trait]
pub trait RendererHandle: Send + Sync {
    /// Advance to the next step.
    async fn show_next(&self) -> Result<(), RenderError>;

    /// Go back one step.
    async fn show_previous(&self) -> Result<(), RenderError>;

    /// Tear down the highlight/popup surface. Idempotent.
    async fn destroy(&self) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::model::StepAction;

    #[test]
    fn render_step_applies_default_buttons() {
        let step = StepDefinition::new("search", "Find anything");
        let rendered = RenderStep::from_definition(&step);
        assert_eq!(rendered.buttons.len(), 2);
        assert_eq!(rendered.buttons[1].action, StepAction::Next);
    }

    #[test]
    fn render_step_keeps_authored_buttons() {
        let step = StepDefinition::new("wrap-up", "All done").with_buttons(vec![
            StepButton::primary("Finish", StepAction::FinishAndDismiss),
        ]);
        let rendered = RenderStep::from_definition(&step);
        assert_eq!(rendered.buttons.len(), 1);
        assert_eq!(rendered.buttons[0].action, StepAction::FinishAndDismiss);
    }

    #[test]
    fn body_markup_wraps_label() {
        let step = StepDefinition::new("search", "Find <strong>anything</strong>");
        let rendered = RenderStep::from_definition(&step);
        assert!(rendered.body_markup.contains("💡"));
        assert!(rendered.body_markup.contains("Find <strong>anything</strong>"));
        assert!(rendered.body_markup.starts_with("<div"));
    }

    #[test]
    fn render_step_fixed_presentation_flags() {
        let rendered = RenderStep::from_definition(&StepDefinition::new("k", "l"));
        assert!(!rendered.arrow);
        assert!(!rendered.scroll_to);
        assert_eq!(rendered.anchor_selector, "[data-tour=\"k\"]");
    }

    #[test]
    fn plan_carries_config_surface() {
        let config = TourConfig::default();
        let steps = vec![
            StepDefinition::new("a", "first"),
            StepDefinition::new("b", "second"),
        ];
        let plan = RenderPlan::from_steps(&config, &steps);
        assert_eq!(plan.container_id.as_deref(), Some("tour-container"));
        assert!(plan.use_modal_overlay);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps[0].id, "a");
        assert_eq!(plan.steps[1].id, "b");
    }
}
