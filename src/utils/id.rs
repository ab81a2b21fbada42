//! 实体 ID 与时间戳

use uuid::Uuid;

/// 生成进程内唯一的实体 ID（UUID v4，32 位十六进制）
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// 当前毫秒时间戳
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
