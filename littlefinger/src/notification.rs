//! Notification posted before a payment-refused fault.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifier every gate notification is posted under.
pub const NOTIFICATION_ID: i32 = 1;

/// Title and text sent by the server with a 409.
///
/// Field names are fixed by the server contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    /// Notification title.
    #[serde(rename = "NotificationTitle", default)]
    pub title: Option<String>,
    /// Notification body text.
    #[serde(rename = "NotificationText", default)]
    pub text: Option<String>,
}

impl NotificationContent {
    /// Parses a response body. `None` if it is not a JSON object.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        match serde_json::from_str::<serde_json::Value>(body).ok()? {
            value @ serde_json::Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }
}

/// Host surface for user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Posts `content` under `id`, replacing any notification with that id.
    fn notify(&self, id: i32, content: &NotificationContent);
}

/// Notifier that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, id: i32, content: &NotificationContent) {
        warn!(
            id,
            title = content.title.as_deref().unwrap_or(""),
            text = content.text.as_deref().unwrap_or(""),
            "notification"
        );
    }
}
