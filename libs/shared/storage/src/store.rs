// libs/shared/storage/src/store.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Failed to encode collection '{collection}': {message}")]
    Encode { collection: String, message: String },
}

/// The opaque key-value store the wizard persists through. Values are raw
/// strings; JSON framing is the repository's concern.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Process-local store used in production for the single-user session and
/// in tests as the storage fake.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before handing the store to a component, the way the
    /// externally managed collections arrive already populated.
    pub fn with_entry(self, key: &str, value: String) -> Self {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
        self
    }
}

#[async_trait]
impl LocalStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Read("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Write("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
