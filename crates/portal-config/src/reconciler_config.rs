use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROFILE_FETCH_TIMEOUT_MS, DEFAULT_SIGN_IN_TIMEOUT_MS,
    MAX_PROFILE_FETCH_TIMEOUT_MS, MAX_SIGN_IN_TIMEOUT_MS, MIN_PROFILE_FETCH_TIMEOUT_MS,
    MIN_SIGN_IN_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Bound on the profile fetch raced on every auth transition
    pub profile_fetch_timeout_ms: u64,
    /// Upper bound on the interactive sign-in popup
    pub sign_in_timeout_ms: u64,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            profile_fetch_timeout_ms: DEFAULT_PROFILE_FETCH_TIMEOUT_MS,
            sign_in_timeout_ms: DEFAULT_SIGN_IN_TIMEOUT_MS,
        }
    }
}

impl ReconcilerConfig {
    pub fn profile_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.profile_fetch_timeout_ms)
    }

    pub fn sign_in_timeout(&self) -> Duration {
        Duration::from_millis(self.sign_in_timeout_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.profile_fetch_timeout_ms < MIN_PROFILE_FETCH_TIMEOUT_MS
            || self.profile_fetch_timeout_ms > MAX_PROFILE_FETCH_TIMEOUT_MS
        {
            return Err(ConfigError::reconciler(format!(
                "reconciler.profile_fetch_timeout_ms must be {}-{}, got {}",
                MIN_PROFILE_FETCH_TIMEOUT_MS,
                MAX_PROFILE_FETCH_TIMEOUT_MS,
                self.profile_fetch_timeout_ms
            )));
        }

        if self.sign_in_timeout_ms < MIN_SIGN_IN_TIMEOUT_MS
            || self.sign_in_timeout_ms > MAX_SIGN_IN_TIMEOUT_MS
        {
            return Err(ConfigError::reconciler(format!(
                "reconciler.sign_in_timeout_ms must be {}-{}, got {}",
                MIN_SIGN_IN_TIMEOUT_MS, MAX_SIGN_IN_TIMEOUT_MS, self.sign_in_timeout_ms
            )));
        }

        // The popup should never be cut off before the fetch it triggers
        if self.sign_in_timeout_ms < self.profile_fetch_timeout_ms {
            return Err(ConfigError::reconciler(format!(
                "reconciler.sign_in_timeout_ms ({}) must not be below profile_fetch_timeout_ms ({})",
                self.sign_in_timeout_ms, self.profile_fetch_timeout_ms
            )));
        }

        Ok(())
    }
}
