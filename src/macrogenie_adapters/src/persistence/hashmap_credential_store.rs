use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use macrogenie_core::{Credential, CredentialStore, CredentialStoreError};

use crate::config::DEFAULT_CREDENTIAL_KEY;

/// In-memory credential store; the slot does not survive the process.
#[derive(Clone)]
pub struct HashMapCredentialStore {
    slots: Arc<RwLock<HashMap<String, Credential>>>,
    key: String,
}

impl Default for HashMapCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMapCredentialStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_CREDENTIAL_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
            key: key.into(),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashMapCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError> {
        let slots = self.slots.read().await;
        Ok(slots.get(&self.key).cloned())
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError> {
        let mut slots = self.slots.write().await;
        slots.insert(self.key.clone(), credential);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        let mut slots = self.slots.write().await;
        slots.remove(&self.key);
        Ok(())
    }
}
