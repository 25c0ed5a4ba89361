use std::sync::Arc;

use tokio::sync::RwLock;

/// Remembers the active screen so validation runs once per location change.
#[derive(Clone, Default)]
pub struct NavigationTracker {
    current: Arc<RwLock<Option<String>>>,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `location` as active. Returns `true` if it differs from the
    /// previously active one.
    pub async fn enter(&self, location: &str) -> bool {
        let mut current = self.current.write().await;
        if current.as_deref() == Some(location) {
            return false;
        }
        *current = Some(location.to_string());
        true
    }

    pub async fn current(&self) -> Option<String> {
        self.current.read().await.clone()
    }
}
