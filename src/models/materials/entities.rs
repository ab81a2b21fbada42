use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::impl_record;

/// 课程资料
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct Material {
    pub id: String,
    pub title: String,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
    pub created_by: String,
    pub created_at: i64,
}

impl_record!(Material);
