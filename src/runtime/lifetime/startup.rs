use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::errors::Result;
use crate::services::ClassroomService;
use crate::storage::StorageAdapter;
use crate::store::EntityStore;

pub struct StartupContext {
    pub service: ClassroomService,
}

/// 准备服务器启动的上下文
/// 创建存储后端，加载课堂快照并写回一次
pub async fn prepare_server_startup(config: &StorageConfig) -> Result<StartupContext> {
    let backend = crate::storage::create_storage(config).await?;

    if cfg!(debug_assertions) {
        crate::storage::register::debug_storage_registry();
        debug!("Debug mode: Storage registry is enabled");
    }

    let adapter = StorageAdapter::new(backend, config.key_prefix.clone());
    let store = EntityStore::open(adapter).await?;
    warn!("Classroom state loaded and persisted");

    Ok(StartupContext {
        service: ClassroomService::new(store),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_startup_with_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: "file".to_string(),
            file: crate::config::FileStorageConfig {
                dir: dir.path().to_string_lossy().into_owned(),
            },
            ..Default::default()
        };

        let context = prepare_server_startup(&config).await.unwrap();
        assert_eq!(context.service.session().await, None);
        assert!(dir.path().join("vc_assignments.json").exists());
        assert!(dir.path().join("vc_user.json").exists());
    }
}
