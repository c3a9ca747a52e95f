//! Local preference store seam — durable per-profile key-value storage.
//!
//! The browser host backs this with `localStorage`; tests and headless
//! embedders use [`MemoryPrefs`]. The tour only ever stores one key (the
//! dismissal flag), but the trait is a plain string KV so hosts can reuse
//! an existing preference layer.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Backend-agnostic preference storage.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a preference value. `None` means the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a preference value, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory preference store for tests and embedders without durable storage.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPrefs {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let prefs = MemoryPrefs::new();
        prefs.set("fm/tour-dismissed", "2024-01-01").await.unwrap();
        assert_eq!(
            prefs.get("fm/tour-dismissed").await.unwrap().as_deref(),
            Some("2024-01-01")
        );
    }

    #[tokio::test]
    async fn set_overwrites() {
        let prefs = MemoryPrefs::new();
        prefs.set("k", "a").await.unwrap();
        prefs.set("k", "b").await.unwrap();
        assert_eq!(prefs.get("k").await.unwrap().as_deref(), Some("b"));
    }
}
