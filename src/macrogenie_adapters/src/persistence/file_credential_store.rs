use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use macrogenie_core::{Credential, CredentialStore, CredentialStoreError};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::Mutex;

type Slots = BTreeMap<String, String>;

/// Credential store backed by a JSON file of named slots.
///
/// Other slots in the same file are left untouched. Read-modify-write cycles
/// are serialized through a lock shared by all clones.
#[derive(Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    key: String,
    lock: Arc<Mutex<()>>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_slots(&self) -> Result<Slots, CredentialStoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => {
                return Err(CredentialStoreError::Io(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Slots::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            CredentialStoreError::Corrupt(format!("Failed to parse {}: {e}", self.path.display()))
        })
    }

    async fn write_slots(&self, slots: &Slots) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CredentialStoreError::Io(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(slots)
            .map_err(|e| CredentialStoreError::Corrupt(e.to_string()))?;

        tokio::fs::write(&self.path, json).await.map_err(|e| {
            CredentialStoreError::Io(format!("Failed to write {}: {e}", self.path.display()))
        })?;

        restrict_permissions(&self.path).await
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), CredentialStoreError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .map_err(|e| CredentialStoreError::Io(format!("Failed to set permissions: {e}")))
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), CredentialStoreError> {
    Ok(())
}

#[async_trait::async_trait]
impl CredentialStore for FileCredentialStore {
    #[tracing::instrument(name = "FileCredentialStore::get", skip(self))]
    async fn get(&self) -> Result<Option<Credential>, CredentialStoreError> {
        let _guard = self.lock.lock().await;
        let slots = self.read_slots().await?;

        // An empty slot is treated as absent rather than as a parse failure.
        Ok(slots
            .get(&self.key)
            .and_then(|token| Credential::try_from(Secret::new(token.clone())).ok()))
    }

    #[tracing::instrument(name = "FileCredentialStore::set", skip_all)]
    async fn set(&self, credential: Credential) -> Result<(), CredentialStoreError> {
        let _guard = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        slots.insert(
            self.key.clone(),
            credential.as_ref().expose_secret().clone(),
        );
        self.write_slots(&slots).await?;
        tracing::debug!(path = %self.path.display(), "Credential stored");
        Ok(())
    }

    #[tracing::instrument(name = "FileCredentialStore::clear", skip(self))]
    async fn clear(&self) -> Result<(), CredentialStoreError> {
        let _guard = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        if slots.remove(&self.key).is_none() {
            return Ok(());
        }
        self.write_slots(&slots).await?;
        tracing::debug!(path = %self.path.display(), "Credential cleared");
        Ok(())
    }
}
