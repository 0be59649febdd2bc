//! The one outbound request.

use reqwest::{Client, Url};
use tokio::sync::oneshot;
use tracing::debug;

use crate::decision::RemoteDecision;
use crate::error::{FatalFault, LittleFingerError, LittleFingerResult};

/// What came back from the payment endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The server answered.
    Success {
        /// HTTP status code.
        status: u16,
        /// Response body. Empty if it could not be read.
        body: String,
    },
    /// No response was received.
    TransportFailure(String),
}

/// Sends a bare GET to `url` and reports the outcome.
pub async fn fetch(client: &Client, url: &str) -> DispatchOutcome {
    let url = match Url::parse(url) {
        Ok(url) => url,
        Err(e) => return DispatchOutcome::TransportFailure(format!("invalid url {url:?}: {e}")),
    };

    debug!(%url, "sending payment check");
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return DispatchOutcome::TransportFailure(e.to_string()),
    };

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_else(|e| {
        debug!(status, error = %e, "could not read response body");
        String::new()
    });
    debug!(status, body_len = body.len(), "payment check answered");

    DispatchOutcome::Success { status, body }
}

/// Result of a completed check: a decision, or the kill signal.
pub type CheckOutcome = Result<RemoteDecision, FatalFault>;

/// Receiving end of an in-flight check.
#[derive(Debug)]
#[must_use = "dropping the handle discards the check outcome"]
pub struct CheckHandle {
    rx: oneshot::Receiver<CheckOutcome>,
}

impl CheckHandle {
    pub(crate) fn new(rx: oneshot::Receiver<CheckOutcome>) -> Self {
        Self { rx }
    }

    /// Waits for the check to finish.
    pub async fn outcome(self) -> LittleFingerResult<CheckOutcome> {
        self.rx.await.map_err(|_| LittleFingerError::ChannelClosed)
    }
}
