//! Key-value settings namespaces.
//!
//! A namespace is a flat map of string keys to string values. On disk it is
//! one JSON object per namespace, `<dir>/<namespace>.json`.

use crate::error::{LittleFingerError, LittleFingerResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Namespace the gate keeps its flag in.
pub const SETTINGS_NAMESPACE: &str = "little_finger_settings";

/// Abstract string settings store.
pub trait SettingsStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_string(&self, key: &str) -> LittleFingerResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put_string(&self, key: &str, value: &str) -> LittleFingerResult<()>;

    /// Reads `key`, falling back to `default` when unset or unreadable.
    fn read_or(&self, key: &str, default: &str) -> String {
        match self.get_string(key) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(e) => {
                debug!(key, error = %e, "settings read failed, using default");
                default.to_string()
            }
        }
    }
}

/// Settings namespace persisted as a JSON file.
pub struct FileSettings {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSettings {
    /// Opens the namespace `namespace` under `dir`.
    ///
    /// Nothing touches the disk until the first write.
    pub fn open(dir: impl AsRef<Path>, namespace: &str) -> LittleFingerResult<Self> {
        if namespace.is_empty() || namespace.contains(['/', '\\']) {
            return Err(LittleFingerError::Config(format!(
                "invalid settings namespace: {namespace:?}"
            )));
        }
        Ok(Self {
            path: dir.as_ref().join(format!("{namespace}.json")),
            lock: Mutex::new(()),
        })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> LittleFingerResult<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, map: &BTreeMap<String, String>) -> LittleFingerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(map)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get_string(&self, key: &str) -> LittleFingerResult<Option<String>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| LittleFingerError::Storage("settings lock poisoned".into()))?;
        Ok(self.load()?.remove(key))
    }

    fn put_string(&self, key: &str, value: &str) -> LittleFingerResult<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| LittleFingerError::Storage("settings lock poisoned".into()))?;
        let mut map = self.load()?;
        map.insert(key.to_string(), value.to_string());
        self.store(&map)
    }
}

/// In-process settings namespace.
#[derive(Default)]
pub struct MemorySettings {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySettings {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get_string(&self, key: &str) -> LittleFingerResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| LittleFingerError::Storage("settings lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn put_string(&self, key: &str, value: &str) -> LittleFingerResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| LittleFingerError::Storage("settings lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
