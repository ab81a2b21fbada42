use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Self::environment())
    }

    /// `CLASSROOM_` 前缀的环境变量，层级之间用双下划线分隔
    ///
    /// 例如 `CLASSROOM_UPLOAD__MAX_SIZE` 对应 `upload.max_size`。
    fn environment() -> Environment {
        Environment::with_prefix("CLASSROOM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证无配置文件时也能启动
            .set_default("app.system_name", "Virtual Classroom")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8787_i64)?
            .set_default("server.timeouts.client_request", 5000_i64)?
            .set_default("server.timeouts.client_disconnect", 1000_i64)?
            .set_default("server.timeouts.keep_alive", 30_i64)?
            .set_default("server.limits.max_payload_size", 16_777_216_i64)?
            .set_default("storage.backend", "file")?
            .set_default("storage.key_prefix", "vc_")?
            .set_default("storage.file.dir", "data")?
            .set_default("storage.redis.url", "redis://127.0.0.1:6379")?
            .set_default("cors.max_age", 3600_i64)?
            .set_default("upload.max_size", 5_242_880_i64)?
            .set_default(
                "upload.allowed_types",
                vec![".pdf", ".png", ".jpg", ".jpeg", ".txt", ".md", ".docx", ".zip"],
            )?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(environment);

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?
            .set_override_option("storage.file.dir", std::env::var("STORAGE_DIR").ok())?
            .set_override_option("storage.redis.url", std::env::var("REDIS_URL").ok())?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = AppConfig::load().expect("defaults should deserialize");
        assert!(!config.storage.key_prefix.is_empty());
        assert!(config.upload.max_size > 0);
        assert!(
            config
                .upload
                .allowed_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(".pdf"))
        );
    }

    #[test]
    fn test_env_keys_keep_snake_case_fields() {
        let vars = config::Map::from([
            ("CLASSROOM_UPLOAD__MAX_SIZE".to_string(), "1024".to_string()),
            ("CLASSROOM_STORAGE__KEY_PREFIX".to_string(), "test_".to_string()),
            ("CLASSROOM_CORS__MAX_AGE".to_string(), "60".to_string()),
            ("OTHER_UPLOAD__MAX_SIZE".to_string(), "1".to_string()),
        ]);
        let config = AppConfig::load_with(AppConfig::environment().source(Some(vars)))
            .expect("env overrides should deserialize");
        assert_eq!(config.upload.max_size, 1024);
        assert_eq!(config.storage.key_prefix, "test_");
        assert_eq!(config.cors.max_age, 60);
    }

    #[test]
    fn test_bind_address_format() {
        let config = AppConfig::load().expect("defaults should deserialize");
        let address = config.server_bind_address();
        assert!(address.contains(':'));
        assert!(address.ends_with(&config.server.port.to_string()));
    }
}
