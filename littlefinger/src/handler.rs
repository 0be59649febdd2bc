//! Reaction to the server's answer.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::decision::RemoteDecision;
use crate::dispatch::{CheckOutcome, DispatchOutcome};
use crate::error::FatalFault;
use crate::notification::{NOTIFICATION_ID, NotificationContent, Notifier};
use crate::status::CheckStatus;

/// Turns one dispatch outcome into a decision or a fault.
pub struct ResponseHandler {
    status: CheckStatus,
    notifier: Arc<dyn Notifier>,
    notifications_enabled: bool,
}

impl ResponseHandler {
    /// Creates a handler writing to `status` and posting to `notifier`.
    pub fn new(status: CheckStatus, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            status,
            notifier,
            notifications_enabled: true,
        }
    }

    /// Turns notification posting on or off. The 409 fault happens either way.
    #[must_use]
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    /// Handles the outcome of the single request.
    pub fn handle(&self, outcome: DispatchOutcome) -> CheckOutcome {
        match outcome {
            DispatchOutcome::Success { status, body } => self.handle_response(status, &body),
            DispatchOutcome::TransportFailure(reason) => {
                error!(reason = %reason, "payment check failed to connect");
                Err(FatalFault::transport(reason))
            }
        }
    }

    /// Handles a response with the given status and body.
    pub fn handle_response(&self, status: u16, body: &str) -> CheckOutcome {
        let decision = RemoteDecision::from_status(status);
        match decision {
            RemoteDecision::Pending => {
                debug!(status, "payment pending");
            }
            RemoteDecision::Accepted => {
                info!(status, "payment accepted");
                if let Err(e) = self.status.cancel_call() {
                    // The next init checks again.
                    warn!(error = %e, "failed to persist check flag");
                }
            }
            RemoteDecision::Rejected => return Err(self.reject(body)),
            RemoteDecision::Defer => {
                debug!(status, "ignoring status");
            }
        }
        Ok(decision)
    }

    fn reject(&self, body: &str) -> FatalFault {
        let mut notified = false;
        if self.notifications_enabled {
            match NotificationContent::from_body(body) {
                Some(content) => {
                    self.notifier.notify(NOTIFICATION_ID, &content);
                    notified = true;
                }
                None => debug!("conflict body is not a notification"),
            }
        }
        error!(notified, "payment refused");
        FatalFault::conflict(notified)
    }
}
