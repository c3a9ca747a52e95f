//! Error types for the tour engine.
//!
//! None of these escape the orchestrator's public operations — a tour that
//! cannot do something degrades (step skipped, effect missing, flag unwritten)
//! rather than surfacing an error to the user. The enums exist at the
//! collaborator trait seams so implementations have something precise to
//! return and logs have something precise to print.

/// Top-level error type for the tour engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),

    #[error("Renderer error: {0}")]
    Render(#[from] RenderError),

    #[error("Celebration error: {0}")]
    Celebration(#[from] CelebrationError),

    #[error("Step hook error: {0}")]
    Hook(#[from] HookError),
}

/// Local preference store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read preference {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

/// Tour renderer errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Renderer failed to start: {0}")]
    StartFailed(String),

    #[error("Renderer could not advance to step {step}: {reason}")]
    Advance { step: String, reason: String },

    #[error("Renderer teardown failed: {0}")]
    Teardown(String),
}

/// Celebration effect errors.
#[derive(Debug, thiserror::Error)]
pub enum CelebrationError {
    #[error("Celebration assets failed to load: {0}")]
    LoadFailed(String),

    #[error("Celebration playback failed: {0}")]
    PlaybackFailed(String),
}

/// Step lifecycle hook errors. Always swallowed by the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Hook target not found: {0}")]
    TargetMissing(String),

    #[error("Hook failed: {0}")]
    Failed(String),
}

/// Result type alias for the tour engine.
pub type Result<T> = std::result::Result<T, Error>;
