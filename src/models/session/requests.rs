use serde::Deserialize;
use ts_rs::TS;

use super::entities::Role;

/// 登录请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct LoginRequest {
    pub name: String,
    pub role: Role,
}
