//! fm-tour — guided onboarding walkthrough engine for the file-manager UI.
//!
//! The crate owns the tour's control flow: which steps show, in what order,
//! how the session reacts to Next/Previous/Skip/Finish, and the once-ever
//! dismissal flag. Rendering, positioning, confetti, and durable storage
//! live behind the trait seams in [`render`], [`celebrate`], [`prefs`],
//! [`host`], and [`dom`].

pub mod celebrate;
pub mod config;
pub mod dom;
pub mod error;
pub mod host;
pub mod prefs;
pub mod render;
pub mod tour;
