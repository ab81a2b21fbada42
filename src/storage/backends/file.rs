//! 本地目录存储：每个键一个 JSON 文件
//!
//! 写入先落到临时文件再重命名，避免进程中断时留下半截文件。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::declare_storage_backend;
use crate::errors::{ClassroomError, Result};
use crate::storage::KeyValueStorage;

declare_storage_backend!("file", FileStorage);

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// 打开（必要时创建）存储目录
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await.map_err(|e| {
            ClassroomError::storage_connection(format!(
                "无法创建存储目录 {}: {e}",
                dir.display()
            ))
        })?;
        info!("FileStorage opened at {}", dir.display());
        Ok(Self { dir })
    }

    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        Self::open(&config.file.dir).await
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ClassroomError::storage_operation(format!(
                "非法的存储键: '{key}'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(raw) => {
                debug!("Read {} bytes from {}", raw.len(), path.display());
                Ok(Some(raw))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
