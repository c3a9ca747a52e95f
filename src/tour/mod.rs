//! Tour orchestration — step definitions, session state machine, and the
//! orchestrator that ties them to the external renderer, celebration effect,
//! host session flag, and preference store.
//!
//! One tour runs at most once per browser profile: completing or skipping it
//! writes a durable dismissal flag, and `initialize` is a silent no-op from
//! then on.

pub mod catalog;
pub mod model;
pub mod orchestrator;
pub mod state;

pub use catalog::file_manager_steps;
pub use model::{
    ButtonRole, Placement, StepAction, StepButton, StepDefinition, StepHook, default_buttons,
};
pub use orchestrator::{Orchestrator, TourDeps};
pub use state::{TourPhase, TourSession};
