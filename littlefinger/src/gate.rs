//! Startup entry point.

use reqwest::Client;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::config::LittleFingerConfig;
use crate::dispatch::{self, CheckHandle, CheckOutcome};
use crate::error::{FatalFault, LittleFingerError, LittleFingerResult};
use crate::handler::ResponseHandler;
use crate::notification::{LogNotifier, Notifier};
use crate::settings::{FileSettings, SettingsStore};
use crate::status::CheckStatus;

/// A payment gate bound to one settings namespace and one HTTP client.
pub struct LittleFinger {
    client: Client,
    status: CheckStatus,
    handler: Arc<ResponseHandler>,
    undelivered: Arc<Mutex<Option<FatalFault>>>,
}

impl LittleFinger {
    /// Builds a gate with file-backed settings and log notifications.
    pub fn new(config: &LittleFingerConfig) -> LittleFingerResult<Self> {
        let store = FileSettings::open(config.resolved_settings_dir()?, &config.namespace)?;
        Self::with_parts(config, Arc::new(store), Arc::new(LogNotifier))
    }

    /// Builds a gate over a caller-supplied store and notifier.
    pub fn with_parts(
        config: &LittleFingerConfig,
        store: Arc<dyn SettingsStore>,
        notifier: Arc<dyn Notifier>,
    ) -> LittleFingerResult<Self> {
        config.validate()?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let status = CheckStatus::new(store);
        let handler = ResponseHandler::new(status.clone(), notifier)
            .with_notifications(config.notifications_enabled);

        Ok(Self {
            client,
            status,
            handler: Arc::new(handler),
            undelivered: Arc::new(Mutex::new(None)),
        })
    }

    /// Returns the persisted check flag.
    #[must_use]
    pub fn status(&self) -> &CheckStatus {
        &self.status
    }

    /// Starts the payment check against `url` in the background.
    ///
    /// Returns `None` without touching the network when checks have been
    /// disabled. Must be called from inside a Tokio runtime.
    ///
    /// A fault whose handle was dropped is kept for [`Self::take_undelivered_fault`].
    #[must_use = "dropping the handle discards the check outcome"]
    pub fn init(&self, url: &str) -> LittleFingerResult<Option<CheckHandle>> {
        if !self.status.should_make_call() {
            debug!("payment checks disabled, skipping");
            return Ok(None);
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| LittleFingerError::Runtime(e.to_string()))?;
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let handler = Arc::clone(&self.handler);
        let undelivered = Arc::clone(&self.undelivered);
        let url = url.to_string();

        runtime.spawn(async move {
            let outcome = dispatch::fetch(&client, &url).await;
            match tx.send(handler.handle(outcome)) {
                Ok(()) => {}
                Err(Ok(decision)) => {
                    debug!(%decision, "check handle dropped before completion");
                }
                Err(Err(fault)) => {
                    error!(%fault, "check handle dropped, fault undelivered");
                    if let Ok(mut slot) = undelivered.lock() {
                        *slot = Some(fault);
                    }
                }
            }
        });

        Ok(Some(CheckHandle::new(rx)))
    }

    /// Takes the fault of a check whose handle was dropped, if any.
    pub fn take_undelivered_fault(&self) -> Option<FatalFault> {
        self.undelivered.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Runs the payment check to completion on the current task.
    ///
    /// `None` when checks have been disabled.
    pub async fn check(&self, url: &str) -> Option<CheckOutcome> {
        if !self.status.should_make_call() {
            debug!("payment checks disabled, skipping");
            return None;
        }
        let outcome = dispatch::fetch(&self.client, url).await;
        Some(self.handler.handle(outcome))
    }
}
