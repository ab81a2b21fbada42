use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 键值存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: String,    // file / memory / redis
    pub key_prefix: String, // 记录键前缀，如 "vc_"
    pub file: FileStorageConfig,
    pub redis: RedisStorageConfig,
}

/// 本地文件存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStorageConfig {
    pub dir: String,
}

/// Redis 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisStorageConfig {
    pub url: String,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub max_age: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_size: usize,            // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            key_prefix: "vc_".to_string(),
            file: FileStorageConfig {
                dir: "data".to_string(),
            },
            redis: RedisStorageConfig {
                url: "redis://127.0.0.1:6379".to_string(),
            },
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size: 5 * 1024 * 1024,
            allowed_types: [".pdf", ".png", ".jpg", ".jpeg", ".txt", ".md", ".docx", ".zip"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
