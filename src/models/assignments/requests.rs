use serde::Deserialize;
use ts_rs::TS;

use crate::models::files::entities::EmbeddedFile;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub due: String, // YYYY-MM-DD
    #[serde(default)]
    pub file: Option<EmbeddedFile>,
}

/// 按 ID 删除（作业、资料、测验、公告、论坛帖子共用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct DeleteByIdRequest {
    pub id: String,
}
