//! 键值存储层
//!
//! - `adapter`: 带键前缀、类型化读写的存储适配器（读失败回退默认值）
//! - `backends`: 具体后端（file / memory / redis）
//! - `register`: 按名称注册与查找后端构造器

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::errors::{ClassroomError, Result};

pub mod adapter;
pub mod backends;
pub mod register;

pub use adapter::{RecordKey, StorageAdapter};

/// 持久化键值后端
///
/// 读写的都是已序列化的 JSON 文本；解析与默认值回退由 [`StorageAdapter`] 负责。
#[async_trait::async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// 读取原始值，不存在时返回 `None`
    async fn get_raw(&self, key: &str) -> Result<Option<String>>;
    /// 写入原始值（覆盖）
    async fn set_raw(&self, key: &str, value: String) -> Result<()>;
    /// 删除键，不存在时视为成功
    async fn remove(&self, key: &str) -> Result<()>;
}

/// 声明一个存储后端，生成 `register()` 注册函数
///
/// 后端类型需提供 `async fn connect(&StorageConfig) -> Result<Self>`。
#[macro_export]
macro_rules! declare_storage_backend {
    ($name:literal, $ty:ty) => {
        pub fn register() {
            $crate::storage::register::register_storage_backend(
                $name,
                std::sync::Arc::new(
                    |config: $crate::config::StorageConfig|
                     -> $crate::storage::register::BoxedStorageFuture {
                        Box::pin(async move {
                            let backend = <$ty>::connect(&config).await?;
                            Ok::<_, $crate::errors::ClassroomError>(
                                Box::new(backend) as Box<dyn $crate::storage::KeyValueStorage>
                            )
                        })
                    },
                ),
            );
        }
    };
}

/// 注册内置后端
pub fn register_builtin_backends() {
    backends::file::register();
    backends::memory::register();
    backends::redis::register();
}

/// 按配置创建存储后端；失败时回退到内存后端
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn KeyValueStorage>> {
    register_builtin_backends();

    let backend = &config.backend;
    info!("Attempting to create {} storage backend", backend);

    match register::get_storage_backend(backend) {
        Some(constructor) => match constructor(config.clone()).await {
            Ok(storage) => {
                info!("Successfully created {} storage backend", backend);
                return Ok(Arc::from(storage));
            }
            Err(e) => warn!("Failed to create {} storage: {}", backend, e),
        },
        None => warn!("Storage backend '{}' not found in registry", backend),
    }

    if backend != "memory" {
        warn!("Falling back to in-memory storage, data will not survive a restart");
        if let Some(fallback) = register::get_storage_backend("memory") {
            let storage = fallback(config.clone()).await?;
            return Ok(Arc::from(storage));
        }
    }

    Err(ClassroomError::storage_backend_not_found(format!(
        "No storage backend available (tried: {backend})"
    )))
}
