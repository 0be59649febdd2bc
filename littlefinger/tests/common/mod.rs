//! Shared test helpers for gate tests.

#![allow(dead_code)]

use littlefinger::{
    LittleFinger, LittleFingerConfig, LittleFingerError, LittleFingerResult, MemorySettings,
    NotificationContent, Notifier, SettingsStore,
};
use std::sync::{Arc, Mutex};

/// Notifier that remembers everything it was asked to post.
#[derive(Default)]
pub struct RecordingNotifier {
    posted: Mutex<Vec<(i32, NotificationContent)>>,
}

impl RecordingNotifier {
    pub fn posted(&self) -> Vec<(i32, NotificationContent)> {
        self.posted.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, id: i32, content: &NotificationContent) {
        self.posted.lock().unwrap().push((id, content.clone()));
    }
}

/// Store whose every operation fails.
pub struct BrokenSettings;

impl SettingsStore for BrokenSettings {
    fn get_string(&self, _key: &str) -> LittleFingerResult<Option<String>> {
        Err(LittleFingerError::Storage("disk on fire".into()))
    }

    fn put_string(&self, _key: &str, _value: &str) -> LittleFingerResult<()> {
        Err(LittleFingerError::Storage("disk on fire".into()))
    }
}

/// A gate over in-memory settings with a recording notifier.
pub struct TestGate {
    pub gate: LittleFinger,
    pub store: Arc<MemorySettings>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn test_gate() -> TestGate {
    test_gate_with(&LittleFingerConfig::default())
}

pub fn test_gate_with(config: &LittleFingerConfig) -> TestGate {
    let store = Arc::new(MemorySettings::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let gate = LittleFinger::with_parts(config, store.clone(), notifier.clone()).unwrap();
    TestGate {
        gate,
        store,
        notifier,
    }
}
