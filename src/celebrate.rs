//! Celebration effect seam — the confetti played when the tour completes.
//!
//! The real implementation lazily loads an animation library and draws on a
//! transient canvas. The orchestrator only needs three things from it: warm
//! the assets ahead of time, play to completion, and clean up after itself.
//! Every failure here is decorative — the tour completes either way.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CelebrationError;

/// Decorative completion animation.
#[async_trait]
pub trait CelebrationEffect: Send + Sync {
    /// Fetch/initialize the effect's assets. Idempotent; called at most once
    /// per tour session, ahead of the step that requested it.
    async fn preload(&self) -> Result<(), CelebrationError>;

    /// Play the effect and resolve once it has settled. `settle` bounds the
    /// wait; once started the playback is not cancelable.
    async fn play_and_settle(&self, settle: Duration) -> Result<(), CelebrationError>;

    /// Remove any transient DOM surface the effect created.
    async fn teardown(&self);
}
