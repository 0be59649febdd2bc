//! Mapping from HTTP status to what the gate does about it.

use serde::{Deserialize, Serialize};

/// 402: still waiting for payment.
pub const STATUS_PAYMENT_REQUIRED: u16 = 402;
/// 202: payment received.
pub const STATUS_ACCEPTED: u16 = 202;
/// 409: payment refused.
pub const STATUS_CONFLICT: u16 = 409;

/// What the server's answer means for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteDecision {
    /// Payment outstanding; let the app run.
    Pending,
    /// Status the gate does not act on.
    Defer,
    /// Payment received; stop checking.
    Accepted,
    /// Payment refused; take the host down.
    Rejected,
}

impl RemoteDecision {
    /// Classifies a response status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            STATUS_PAYMENT_REQUIRED => Self::Pending,
            STATUS_ACCEPTED => Self::Accepted,
            STATUS_CONFLICT => Self::Rejected,
            _ => Self::Defer,
        }
    }
}

impl std::fmt::Display for RemoteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Defer => "defer",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}
