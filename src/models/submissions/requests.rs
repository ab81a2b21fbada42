use serde::Deserialize;
use ts_rs::TS;

use crate::models::files::entities::EmbeddedFile;

/// 学生提交作业（仅 PDF）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    pub assignment_id: String,
    #[serde(default)]
    pub file: Option<EmbeddedFile>,
}

/// 学生撤回自己对某作业的提交
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct DeleteOwnSubmissionRequest {
    pub assignment_id: String,
}

/// 教师评分，index 为提交在集合中的位置
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub index: usize,
    pub grade: String,
}
