use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::impl_record;

/// 论坛帖子
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/forum.ts")]
pub struct ForumPost {
    pub id: String,
    #[serde(rename = "msg")]
    pub message: String,
    // 发帖人显示名
    pub user: String,
    pub created_at: i64,
}

impl_record!(ForumPost);
