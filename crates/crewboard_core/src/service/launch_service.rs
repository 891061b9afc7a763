//! First-launch detection for the onboarding flow.
//!
//! # Invariants
//! - A flag that was never written reads as "not launched before".
//! - Marking the app launched is idempotent.

use crate::repo::flag_repo::{FlagRepository, RepoResult};
use log::info;

/// Persisted key for the onboarding gate.
pub const HAS_LAUNCHED_BEFORE_KEY: &str = "has_launched_before";

pub struct LaunchService<R: FlagRepository> {
    repo: R,
}

impl<R: FlagRepository> LaunchService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn has_launched_before(&self) -> RepoResult<bool> {
        Ok(self
            .repo
            .get_flag(HAS_LAUNCHED_BEFORE_KEY)?
            .unwrap_or(false))
    }

    /// Onboarding is shown only on the very first launch.
    pub fn should_show_onboarding(&self) -> RepoResult<bool> {
        self.has_launched_before().map(|launched| !launched)
    }

    pub fn mark_launched(&self) -> RepoResult<()> {
        self.repo.set_flag(HAS_LAUNCHED_BEFORE_KEY, true)?;
        info!("event=launch_mark module=service status=ok");
        Ok(())
    }
}
