//! Default authored step list for the file-manager UI.
//!
//! Embedders are free to pass their own `Vec<StepDefinition>` to the
//! orchestrator; this is the stock walkthrough. Keys must match the
//! `data-tour` attributes sprinkled over the file-manager templates.

use super::model::{Placement, StepAction, StepButton, StepDefinition};

/// The stock file-manager walkthrough, in authoring order.
pub fn file_manager_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new(
            "toolbar-create-folder",
            "Create folders to keep your files organized. Click here to make your first one.",
        )
        .with_title("Welcome aboard")
        .with_buttons(vec![
            StepButton::secondary("Skip tour", StepAction::SkipAndDismiss),
            StepButton::primary("Next", StepAction::Next),
        ]),
        StepDefinition::new(
            "toolbar-upload",
            "Upload files by clicking here, or just drag and drop them anywhere in the browser pane.",
        ),
        StepDefinition::new(
            "search-input",
            "Search across the current directory — results update as you type.",
        ),
        StepDefinition::new(
            "view-toggle",
            "Switch between grid and list views. Your choice sticks around.",
        )
        .with_placement(Placement::BottomEnd),
        StepDefinition::new(
            "favorites-panel",
            "Pin folders you use often and they will show up here.",
        )
        .with_placement(Placement::RightStart),
        StepDefinition::new(
            "help-menu",
            "That's the essentials! You can always find more tips under <strong>Help</strong>.",
        )
        .with_title("You're all set")
        .with_celebration_preload()
        .with_buttons(vec![
            StepButton::secondary("Previous", StepAction::Previous),
            StepButton::primary("Finish", StepAction::FinishAndDismiss),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let steps = file_manager_steps();
        let keys: HashSet<_> = steps.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys.len(), steps.len());
    }

    #[test]
    fn first_step_offers_skip() {
        let steps = file_manager_steps();
        assert!(
            steps[0]
                .buttons
                .iter()
                .any(|b| b.action == StepAction::SkipAndDismiss)
        );
    }

    #[test]
    fn last_step_finishes_and_preloads_celebration() {
        let steps = file_manager_steps();
        let last = steps.last().unwrap();
        assert!(last.preload_celebration);
        assert!(
            last.buttons
                .iter()
                .any(|b| b.action == StepAction::FinishAndDismiss)
        );
    }

    #[test]
    fn middle_steps_fall_back_to_default_buttons() {
        let steps = file_manager_steps();
        // Everything between the bookend steps relies on the standard pair.
        for step in &steps[1..steps.len() - 1] {
            assert!(step.buttons.is_empty(), "step {} should use defaults", step.key);
        }
    }
}
