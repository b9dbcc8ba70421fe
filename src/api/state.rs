//! Application state for the Attendance Summary Engine API.
//!
//! The state carries the collaborators every handler needs: the punch
//! source, the profile directory, the summary store and the clock. All are
//! injected explicitly at construction; handlers never reach for ambient
//! global clients.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::models::UserProfile;
use crate::store::{Clock, ProfileSource, PunchSource, SummaryStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
    punches: Arc<dyn PunchSource>,
    profiles: Arc<dyn ProfileSource>,
    summaries: Arc<dyn SummaryStore>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state with the given collaborators.
    pub fn new(
        config: EngineConfig,
        punches: Arc<dyn PunchSource>,
        profiles: Arc<dyn ProfileSource>,
        summaries: Arc<dyn SummaryStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            punches,
            profiles,
            summaries,
            clock,
        }
    }

    /// Returns the punch source.
    pub fn punches(&self) -> &dyn PunchSource {
        self.punches.as_ref()
    }

    /// Returns the summary store.
    pub fn summaries(&self) -> &dyn SummaryStore {
        self.summaries.as_ref()
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns the profile for a user, falling back to the configured
    /// defaults when the directory does not know them.
    pub fn profile_or_default(&self, user_id: &str) -> UserProfile {
        self.profiles
            .profile_for(user_id)
            .unwrap_or_else(|| self.config.default_profile())
    }
}
