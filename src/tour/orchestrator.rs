//! Orchestrator — builds the filtered step sequence, wires lifecycle
//! callbacks, and drives the completion/dismissal state machine.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::celebrate::CelebrationEffect;
use crate::config::TourConfig;
use crate::dom::AnchorQuery;
use crate::host::HostSession;
use crate::prefs::PreferenceStore;
use crate::render::{RenderPlan, RendererHandle, TourObserver, TourRenderer};

use super::model::{StepAction, StepDefinition};
use super::state::{TourPhase, TourSession};

/// Injected collaborators for the orchestrator.
pub struct TourDeps {
    pub host: Arc<dyn HostSession>,
    pub prefs: Arc<dyn PreferenceStore>,
    pub anchors: Arc<dyn AnchorQuery>,
    pub renderer: Arc<dyn TourRenderer>,
    pub celebration: Arc<dyn CelebrationEffect>,
}

/// Coordinates one tour playthrough: eligibility checks, plan building,
/// lifecycle hooks, and the terminal celebrate → dismiss → teardown sequence.
///
/// Constructed once per page load and used as `Arc<Orchestrator>` — it hands
/// itself to the renderer as the lifecycle observer.
pub struct Orchestrator {
    config: TourConfig,
    deps: TourDeps,
    authored: Vec<StepDefinition>,
    session: RwLock<Option<TourSession>>,
    handle: RwLock<Option<Box<dyn RendererHandle>>>,
}

impl Orchestrator {
    pub fn new(config: TourConfig, deps: TourDeps, authored: Vec<StepDefinition>) -> Self {
        Self {
            config,
            deps,
            authored,
            session: RwLock::new(None),
            handle: RwLock::new(None),
        }
    }

    /// Start a tour if the host wants one and the user has never finished or
    /// skipped one. Every reason not to run is a silent no-op, not an error.
    pub async fn initialize(self: &Arc<Self>) {
        let mut session_guard = self.session.write().await;
        if session_guard.as_ref().is_some_and(|s| s.phase.is_active()) {
            tracing::debug!("tour session already active, ignoring initialize");
            return;
        }

        if !self.deps.host.tour_eligible().await {
            tracing::debug!("host session not tour-eligible, skipping tour");
            return;
        }

        if self.is_dismissed().await {
            tracing::debug!("tour already dismissed for this profile, skipping");
            return;
        }

        // Anchor presence is tested once, here. Anchors that vanish during
        // playback are the renderer's problem, not ours.
        let steps: Vec<StepDefinition> = self
            .authored
            .iter()
            .filter(|step| self.deps.anchors.anchor_exists(&step.selector()))
            .cloned()
            .collect();

        if steps.is_empty() {
            tracing::debug!("no tour step anchors present in the document, skipping");
            return;
        }

        let plan = RenderPlan::from_steps(&self.config, &steps);
        let session = TourSession::new(steps);
        let session_id = session.id;
        let step_count = session.steps.len();
        *session_guard = Some(session);
        drop(session_guard);

        let observer: Arc<dyn TourObserver> = Arc::clone(self) as Arc<dyn TourObserver>;
        match self.deps.renderer.start(plan, observer).await {
            Ok(handle) => {
                *self.handle.write().await = Some(handle);
                let mut guard = self.session.write().await;
                if let Some(session) = guard.as_mut() {
                    session.phase = TourPhase::Running;
                }
                tracing::info!(%session_id, steps = step_count, "tour session started");
            }
            Err(e) => {
                tracing::warn!(%session_id, error = %e, "renderer failed to start, abandoning tour");
                *self.session.write().await = None;
            }
        }
    }

    /// Pure query against the preference store. A store that cannot be read
    /// degrades to "not dismissed" — the tour shows one extra time rather
    /// than never again.
    pub async fn is_dismissed(&self) -> bool {
        match self.deps.prefs.get(&self.config.dismissal_key()).await {
            Ok(value) => value.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "preference read failed, treating tour as not dismissed");
                false
            }
        }
    }

    /// Unconditionally persist the dismissal flag. Callable without an
    /// active session (Skip buttons reach it through the completion path,
    /// hosts can call it directly).
    pub async fn dismiss(&self) {
        let stamp = chrono::Utc::now().to_rfc3339();
        if let Err(e) = self
            .deps
            .prefs
            .set(&self.config.dismissal_key(), &stamp)
            .await
        {
            tracing::warn!(error = %e, "failed to persist tour dismissal");
        }
    }

    /// Whether a playthrough is currently in progress.
    pub async fn is_active(&self) -> bool {
        self.session
            .read()
            .await
            .as_ref()
            .is_some_and(|s| s.phase.is_active())
    }

    /// Resolve a named button action against the current session.
    /// No-op when no session is active.
    pub async fn handle_action(&self, action: StepAction) {
        match action {
            StepAction::Next => {
                let guard = self.handle.read().await;
                if let Some(handle) = guard.as_ref() {
                    if let Err(e) = handle.show_next().await {
                        tracing::warn!(error = %e, "renderer failed to advance");
                    }
                }
            }
            StepAction::Previous => {
                let at_first = self
                    .session
                    .read()
                    .await
                    .as_ref()
                    .is_none_or(|s| s.at_first_step());
                if at_first {
                    return;
                }
                let guard = self.handle.read().await;
                if let Some(handle) = guard.as_ref() {
                    if let Err(e) = handle.show_previous().await {
                        tracing::warn!(error = %e, "renderer failed to go back");
                    }
                }
            }
            StepAction::SkipAndDismiss | StepAction::FinishAndDismiss => {
                self.complete_session().await;
            }
        }
    }

    /// Terminal sequence, run exactly once per session:
    /// celebration settle → persist dismissal → clear host eligibility →
    /// tear down renderer and celebration surface.
    async fn complete_session(&self) {
        let session_id = {
            let mut guard = self.session.write().await;
            let Some(session) = guard.as_mut() else {
                return;
            };
            // Re-entrant complete (Finish while a Skip is settling) is a no-op.
            if session.transition(TourPhase::Completing).is_err() {
                return;
            }
            session.id
        };

        // Non-cancelable once started; failure means no confetti, not no
        // completion.
        if let Err(e) = self
            .deps
            .celebration
            .play_and_settle(self.config.celebration_settle)
            .await
        {
            tracing::warn!(error = %e, "celebration failed to play, finishing tour without it");
        }

        self.dismiss().await;
        self.deps.host.set_tour_eligible(false).await;

        if let Some(handle) = self.handle.write().await.take() {
            if let Err(e) = handle.destroy().await {
                tracing::warn!(error = %e, "renderer teardown failed");
            }
        }
        self.deps.celebration.teardown().await;
        *self.session.write().await = None;
        tracing::info!(%session_id, "tour completed and dismissed");
    }

    /// Run a step's on_show/on_hide hook, swallowing any failure.
    async fn run_hook(&self, key: &str, on_hide: bool) {
        let hook = {
            let guard = self.session.read().await;
            guard.as_ref().and_then(|s| {
                s.step_for_key(key).and_then(|step| {
                    if on_hide {
                        step.on_hide.clone()
                    } else {
                        step.on_show.clone()
                    }
                })
            })
        };
        let Some(hook) = hook else { return };
        if let Err(e) = hook() {
            let kind = if on_hide { "on_hide" } else { "on_show" };
            tracing::warn!(step = key, hook = kind, error = %e, "step hook failed, continuing tour");
        }
    }
}

#[async_trait::async_trait]
impl TourObserver for Orchestrator {
    async fn before_show(&self, key: &str) {
        let preload = {
            let mut guard = self.session.write().await;
            let Some(session) = guard.as_mut() else {
                return;
            };
            session.mark_current(key);
            session.request_celebration_preload(key)
        };
        if preload {
            // Fire and forget: warming assets must never delay the step.
            let celebration = Arc::clone(&self.deps.celebration);
            tokio::spawn(async move {
                if let Err(e) = celebration.preload().await {
                    tracing::warn!(error = %e, "celebration preload failed");
                }
            });
        }
    }

    async fn step_shown(&self, key: &str) {
        self.run_hook(key, false).await;
    }

    async fn step_hidden(&self, key: &str) {
        self.run_hook(key, true).await;
    }

    async fn tour_complete(&self) {
        self.complete_session().await;
    }
}
