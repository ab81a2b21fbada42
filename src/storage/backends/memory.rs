use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::config::StorageConfig;
use crate::declare_storage_backend;
use crate::errors::Result;
use crate::storage::KeyValueStorage;

declare_storage_backend!("memory", MemoryStorage);

/// 进程内键值存储，重启后数据丢失
#[derive(Default)]
pub struct MemoryStorage {
    inner: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn connect(_config: &StorageConfig) -> Result<Self> {
        debug!("MemoryStorage initialized");
        Ok(Self::new())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.get(key).map(|v| v.value().clone()))
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        self.inner.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_raw("vc_forum").await.unwrap(), None);

        storage.set_raw("vc_forum", "[]".into()).await.unwrap();
        assert_eq!(storage.get_raw("vc_forum").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.remove("vc_forum").await.unwrap();
        storage.remove("vc_forum").await.unwrap();
        assert!(storage.is_empty());
    }
}
