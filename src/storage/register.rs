use crate::config::StorageConfig;
use crate::errors::Result;
use crate::storage::KeyValueStorage;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedStorageFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn KeyValueStorage>>> + Send>>;
pub type StorageConstructor = Arc<dyn Fn(StorageConfig) -> BoxedStorageFuture + Send + Sync>;

static STORAGE_REGISTRY: Lazy<RwLock<HashMap<String, StorageConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_storage_backend<S: Into<String>>(name: S, constructor: StorageConstructor) {
    let name = name.into();
    let mut registry = STORAGE_REGISTRY
        .write()
        .expect("Storage registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_storage_backend(name: &str) -> Option<StorageConstructor> {
    STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_storage_registry() {
    let registry = STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No storage backends registered.");
    } else {
        tracing::debug!("Registered storage backends:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
