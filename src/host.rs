//! Host session seam — the application-owned "should a tour run" flag.
//!
//! The host flips this on when it wants onboarding for the current
//! user/session; the orchestrator flips it off once the tour completes so
//! the host knows onboarding is done for this page load.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

/// Access to the host application's tour-eligibility flag.
#[async_trait]
pub trait HostSession: Send + Sync {
    /// Whether the host currently wants a tour to run.
    async fn tour_eligible(&self) -> bool;

    /// Update the eligibility flag. The orchestrator clears it on completion.
    async fn set_tour_eligible(&self, eligible: bool);
}

/// A shared boolean flag, for hosts whose session state is in-process.
#[derive(Debug)]
pub struct SharedHostFlag {
    eligible: AtomicBool,
}

impl SharedHostFlag {
    pub fn new(eligible: bool) -> Self {
        Self {
            eligible: AtomicBool::new(eligible),
        }
    }
}

#[async_trait]
impl HostSession for SharedHostFlag {
    async fn tour_eligible(&self) -> bool {
        self.eligible.load(Ordering::SeqCst)
    }

    async fn set_tour_eligible(&self, eligible: bool) {
        self.eligible.store(eligible, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn flag_reads_back() {
        let host = SharedHostFlag::new(true);
        assert!(host.tour_eligible().await);
        host.set_tour_eligible(false).await;
        assert!(!host.tour_eligible().await);
    }
}
