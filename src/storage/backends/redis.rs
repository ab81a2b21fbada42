use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error};

use crate::config::StorageConfig;
use crate::declare_storage_backend;
use crate::errors::{ClassroomError, Result};
use crate::storage::KeyValueStorage;

declare_storage_backend!("redis", RedisStorage);

/// 本机 Redis 键值存储（无 TTL，持久化由 Redis 自身负责）
pub struct RedisStorage {
    client: redis::Client,
}

impl RedisStorage {
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        let url = &config.redis.url;
        let client = redis::Client::open(url.as_str()).map_err(|e| {
            ClassroomError::storage_connection(format!("Invalid Redis URL {url}: {e}"))
        })?;

        let storage = Self { client };
        let mut conn = storage.get_connection().await.map_err(|e| {
            error!(
                "Failed to connect to Redis server: {}. Check Redis server status and URL: {}",
                e, url
            );
            ClassroomError::storage_connection(format!("Redis connection failed: {e}"))
        })?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| ClassroomError::storage_connection(format!("Redis ping failed: {e}")))?;
        debug!("Redis connection test successful: {}", pong);

        Ok(storage)
    }

    async fn get_connection(
        &self,
    ) -> std::result::Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }
}

#[async_trait]
impl KeyValueStorage for RedisStorage {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
