use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::impl_record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    #[serde(rename = "desc")]
    pub description: String,
    // 截止日期（YYYY-MM-DD）
    pub due: String,
    // 附件 data URL
    pub file_data: Option<String>,
    // 附件文件名
    pub file_name: Option<String>,
    // 创建者显示名
    pub created_by: String,
    // 创建时间（毫秒时间戳）
    pub created_at: i64,
}

impl_record!(Assignment);
