//! Host configuration.

use crate::error::{LittleFingerError, LittleFingerResult};
use crate::settings::SETTINGS_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a [`crate::LittleFinger`] instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LittleFingerConfig {
    /// Directory holding the settings namespace. `None` uses the
    /// platform config directory.
    pub settings_dir: Option<PathBuf>,
    /// Settings namespace name.
    pub namespace: String,
    /// Whole-request timeout. `None` leaves the client defaults alone.
    pub request_timeout_secs: Option<u64>,
    /// Post a notification on the 409 path.
    pub notifications_enabled: bool,
}

impl Default for LittleFingerConfig {
    fn default() -> Self {
        Self {
            settings_dir: None,
            namespace: SETTINGS_NAMESPACE.to_string(),
            request_timeout_secs: None,
            notifications_enabled: true,
        }
    }
}

impl LittleFingerConfig {
    /// Loads a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> LittleFingerResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the gate cannot run with.
    pub fn validate(&self) -> LittleFingerResult<()> {
        if self.namespace.trim().is_empty() {
            return Err(LittleFingerError::Config("namespace must not be empty".into()));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(LittleFingerError::Config(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Resolves the settings directory.
    pub fn resolved_settings_dir(&self) -> LittleFingerResult<PathBuf> {
        match &self.settings_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::config_dir()
                .map(|d| d.join("littlefinger"))
                .ok_or_else(|| {
                    LittleFingerError::Config("no platform config directory".into())
                }),
        }
    }

    /// Returns the request timeout, if one is set.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
