//! Configuration types for the Attendance Summary Engine.

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, UserProfile};

/// Engine configuration.
///
/// Carries the defaults applied to users whose profile is absent or
/// incomplete. The built-in defaults match the documented collaborator
/// contract: timezone `UTC`, schedule `09:00`-`18:00`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Defaults applied when a user has no profile.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default timezone and schedule for users without a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// IANA timezone name.
    pub timezone: String,
    /// Default daily schedule.
    #[serde(default)]
    pub schedule: Schedule,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let profile = UserProfile::default();
        Self {
            timezone: profile.timezone,
            schedule: profile.schedule,
        }
    }
}

impl EngineConfig {
    /// Builds the profile used for users the directory does not know.
    pub fn default_profile(&self) -> UserProfile {
        UserProfile {
            name: None,
            timezone: self.defaults.timezone.clone(),
            schedule: self.defaults.schedule.clone(),
        }
    }
}
