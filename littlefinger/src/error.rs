//! Error types for the payment gate.
//!
//! Ordinary failures (storage, config, I/O) are [`LittleFingerError`]s.
//! The deliberate kill signal is a [`FatalFault`], kept apart so the host
//! can never mistake it for something to retry.

use thiserror::Error;

/// Result type for gate operations.
pub type LittleFingerResult<T> = Result<T, LittleFingerError>;

/// Errors that can occur outside the kill path.
#[derive(Debug, Error)]
pub enum LittleFingerError {
    /// Settings store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No Tokio runtime to run the check on.
    #[error("runtime unavailable: {0}")]
    Runtime(String),

    /// The dispatch task ended without delivering an outcome.
    #[error("channel closed")]
    ChannelClosed,
}

/// Why the gate decided to bring the host down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    /// The request never produced a response.
    TransportFailure(String),
    /// The server answered 409: payment was refused.
    PaymentConflict,
}

/// The intentional crash, as a value.
///
/// Returned instead of aborting so the host decides what happens next.
/// [`FatalFault::raise`] reproduces the original behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.kind))]
pub struct FatalFault {
    kind: FaultKind,
    notified: bool,
}

fn describe(kind: &FaultKind) -> String {
    match kind {
        FaultKind::TransportFailure(reason) => {
            format!("fatal fault: payment check transport failure: {reason}")
        }
        FaultKind::PaymentConflict => "fatal fault: payment refused by server".to_string(),
    }
}

impl FatalFault {
    /// Fault for a request that never got a response.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self {
            kind: FaultKind::TransportFailure(reason.into()),
            notified: false,
        }
    }

    /// Fault for a 409 response.
    pub fn conflict(notified: bool) -> Self {
        Self {
            kind: FaultKind::PaymentConflict,
            notified,
        }
    }

    /// Returns what triggered the fault.
    #[must_use]
    pub fn kind(&self) -> &FaultKind {
        &self.kind
    }

    /// Returns true if a notification was posted before the fault.
    #[must_use]
    pub fn notification_posted(&self) -> bool {
        self.notified
    }

    /// Crashes the current thread with this fault.
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}
