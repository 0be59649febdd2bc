//! Remote payment gate.
//!
//! On startup the host asks a server whether it has been paid. The answer
//! is a bare HTTP status:
//!
//! - `402`: still waiting, keep running
//! - `202`: paid, never ask again
//! - `409`: refused, post the server's notification and fault
//!
//! A request that gets no response at all also faults.
//!
//! # Design
//!
//! - **Persisted flag**: `should_call` in the `little_finger_settings`
//!   namespace. Starts `"true"`, flips to `"false"` once, never back
//! - **No ambient state**: the host owns the [`LittleFinger`] and injects
//!   its settings store and notifier
//! - **Faults are values**: the kill signal is a [`FatalFault`] the host
//!   can inspect or [`raise`](FatalFault::raise)
//!
//! # Example
//!
//! ```no_run
//! use littlefinger::{LittleFinger, LittleFingerConfig};
//!
//! # async fn run() -> littlefinger::LittleFingerResult<()> {
//! let gate = LittleFinger::new(&LittleFingerConfig::default())?;
//! if let Some(handle) = gate.init("https://example.com/paid")? {
//!     if let Err(fault) = handle.outcome().await? {
//!         fault.raise();
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod decision;
mod dispatch;
mod error;
mod gate;
mod handler;
mod notification;
mod settings;
mod status;

pub use config::LittleFingerConfig;
pub use decision::{RemoteDecision, STATUS_ACCEPTED, STATUS_CONFLICT, STATUS_PAYMENT_REQUIRED};
pub use dispatch::{CheckHandle, CheckOutcome, DispatchOutcome, fetch};
pub use error::{FatalFault, FaultKind, LittleFingerError, LittleFingerResult};
pub use gate::LittleFinger;
pub use handler::ResponseHandler;
pub use notification::{LogNotifier, NOTIFICATION_ID, NotificationContent, Notifier};
pub use settings::{FileSettings, MemorySettings, SETTINGS_NAMESPACE, SettingsStore};
pub use status::{CheckStatus, SHOULD_CALL_KEY};
