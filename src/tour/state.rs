//! Tour state machine — one session per playthrough.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::StepDefinition;

/// Phases of a tour playthrough.
///
/// Progresses `Idle → Building → Running → Completing → Idle`. Finish/Skip
/// can jump to `Completing` from any active phase; renderer startup failure
/// or an empty plan drops `Building` back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourPhase {
    #[default]
    Idle,
    Building,
    Running,
    Completing,
}

impl TourPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: TourPhase) -> bool {
        use TourPhase::*;
        matches!(
            (self, target),
            (Idle, Building)
                | (Building, Running)
                | (Building, Idle)
                | (Building, Completing)
                | (Running, Completing)
                | (Completing, Idle)
        )
    }

    /// Whether a session in this phase counts as in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl std::fmt::Display for TourPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Building => "building",
            Self::Running => "running",
            Self::Completing => "completing",
        };
        write!(f, "{s}")
    }
}

/// Runtime state for a single playthrough. At most one exists at a time.
#[derive(Debug, Clone)]
pub struct TourSession {
    pub id: Uuid,
    /// The filtered plan, in authoring order.
    pub steps: Vec<StepDefinition>,
    /// Position of the step currently (or most recently) shown.
    pub index: usize,
    pub phase: TourPhase,
    /// Set once the first celebration preload has been kicked off.
    pub celebration_preloaded: bool,
    pub started_at: DateTime<Utc>,
}

impl TourSession {
    /// Create a session over an already-filtered step sequence.
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        Self {
            id: Uuid::new_v4(),
            steps,
            index: 0,
            phase: TourPhase::Building,
            celebration_preloaded: false,
            started_at: Utc::now(),
        }
    }

    /// Attempt a phase transition; invalid transitions are rejected.
    pub fn transition(&mut self, target: TourPhase) -> Result<(), String> {
        if !self.phase.can_transition_to(target) {
            return Err(format!("Cannot transition from {} to {}", self.phase, target));
        }
        self.phase = target;
        Ok(())
    }

    /// Record that the renderer moved to the step with this key.
    /// Unknown keys leave the index untouched.
    pub fn mark_current(&mut self, key: &str) -> Option<usize> {
        let position = self.steps.iter().position(|s| s.key == key)?;
        self.index = position;
        Some(position)
    }

    pub fn step_for_key(&self, key: &str) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.key == key)
    }

    /// Whether a celebration preload should fire for this step, flipping the
    /// once-per-session guard on first request.
    pub fn request_celebration_preload(&mut self, key: &str) -> bool {
        let wants = self
            .step_for_key(key)
            .is_some_and(|s| s.preload_celebration);
        if wants && !self.celebration_preloaded {
            self.celebration_preloaded = true;
            return true;
        }
        false
    }

    pub fn at_first_step(&self) -> bool {
        self.index == 0
    }
}
