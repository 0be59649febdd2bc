//! The persisted "should call" flag.

use crate::error::LittleFingerResult;
use crate::settings::SettingsStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Settings key holding the flag.
pub const SHOULD_CALL_KEY: &str = "should_call";

const ENABLED: &str = "true";
const DISABLED: &str = "false";

/// Gate over the persisted check flag.
///
/// The flag starts out enabled and can only ever be switched off.
#[derive(Clone)]
pub struct CheckStatus {
    store: Arc<dyn SettingsStore>,
}

impl CheckStatus {
    /// Wraps a settings namespace.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Returns true if a remote check should be made.
    ///
    /// Unset or unreadable means yes. Only a stored `"true"` (any case)
    /// keeps the gate open once something has been written.
    #[must_use]
    pub fn should_make_call(&self) -> bool {
        let raw = self.store.read_or(SHOULD_CALL_KEY, ENABLED);
        let enabled = raw.eq_ignore_ascii_case(ENABLED);
        debug!(value = %raw, enabled, "read check flag");
        enabled
    }

    /// Permanently disables future checks. Safe to repeat.
    pub fn cancel_call(&self) -> LittleFingerResult<()> {
        self.store.put_string(SHOULD_CALL_KEY, DISABLED)?;
        info!("remote payment checks disabled");
        Ok(())
    }
}
