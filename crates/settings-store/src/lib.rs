use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use thiserror::Error;

use vidveil_core_types::VidveilError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage payload: {0}")]
    Invalid(String),
}

impl From<StoreError> for VidveilError {
    fn from(value: StoreError) -> Self {
        VidveilError::new(value.to_string())
    }
}

/// Asynchronous key/value settings storage.
///
/// `get` answers with `defaults` overlaid by every persisted key, so the
/// result always carries a value for each key present in `defaults`.
/// Writers (the settings UI path) persist individual keys through `set`;
/// readers only ever see the merged view.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, defaults: Value) -> Result<Value, StoreError>;
    async fn set(&self, entries: Map<String, Value>) -> Result<(), StoreError>;
}

/// In-memory `SettingsStore` holding only the persisted overrides.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self, defaults: Value) -> Result<Value, StoreError> {
        let Value::Object(mut merged) = defaults else {
            return Err(StoreError::Invalid(format!(
                "defaults must be an object, got {defaults}"
            )));
        };
        let entries = self.entries.read();
        for (key, value) in entries.iter() {
            merged.insert(key.clone(), value.clone());
        }
        Ok(Value::Object(merged))
    }

    async fn set(&self, entries: Map<String, Value>) -> Result<(), StoreError> {
        let mut guard = self.entries.write();
        for (key, value) in entries {
            guard.insert(key, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn get_returns_defaults_when_nothing_persisted() {
        let store = MemoryStore::new();
        let merged = store
            .get(json!({"hide_videos": true, "threshold_percent": 100}))
            .await
            .unwrap();
        assert_eq!(merged, json!({"hide_videos": true, "threshold_percent": 100}));
    }

    #[tokio::test]
    async fn persisted_keys_override_defaults() {
        let store = MemoryStore::new();
        store
            .set(object(json!({"hide_videos": false})))
            .await
            .unwrap();
        let merged = store
            .get(json!({"hide_videos": true, "threshold_percent": 100}))
            .await
            .unwrap();
        assert_eq!(merged["hide_videos"], json!(false));
        assert_eq!(merged["threshold_percent"], json!(100));
    }

    #[tokio::test]
    async fn later_writes_replace_earlier_ones() {
        let store = MemoryStore::new();
        store.set(object(json!({"threshold_percent": 40}))).await.unwrap();
        store.set(object(json!({"threshold_percent": 85}))).await.unwrap();
        let merged = store.get(json!({"threshold_percent": 100})).await.unwrap();
        assert_eq!(merged["threshold_percent"], json!(85));
    }

    #[tokio::test]
    async fn non_object_defaults_are_rejected() {
        let store = MemoryStore::new();
        assert!(store.get(json!(42)).await.is_err());
    }
}
