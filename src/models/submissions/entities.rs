use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::impl_record;

// 提交类型
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionKind {
    #[default]
    Assignment, // 作业文件
    Quiz, // 测验答案
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionKind::Assignment => write!(f, "assignment"),
            SubmissionKind::Quiz => write!(f, "quiz"),
        }
    }
}

/// 学生提交（作业文件或测验答案），成绩直接记录在提交上
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    pub target_id: String,
    // 冗余存储的目标标题（作业标题或测验题干）
    pub target_title: String,
    pub student_name: String,
    pub file_data: Option<String>,
    pub file_name: Option<String>,
    pub answer: Option<String>,
    pub grade: Option<String>,
    pub submitted_at: i64,
}

impl_record!(Submission);

impl Submission {
    /// 是否指向给定的父实体
    pub fn targets(&self, kind: SubmissionKind, target_id: &str) -> bool {
        self.kind == kind && self.target_id == target_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_stored_as_type() {
        let submission = Submission {
            id: "s1".into(),
            kind: SubmissionKind::Quiz,
            target_id: "q1".into(),
            answer: Some("4".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["type"], "quiz");
        assert_eq!(value["targetId"], "q1");
        assert!(value["grade"].is_null());
    }

    #[test]
    fn test_targets_matches_kind_and_id() {
        let submission = Submission {
            kind: SubmissionKind::Assignment,
            target_id: "x".into(),
            ..Default::default()
        };
        assert!(submission.targets(SubmissionKind::Assignment, "x"));
        assert!(!submission.targets(SubmissionKind::Quiz, "x"));
        assert!(!submission.targets(SubmissionKind::Assignment, "y"));
    }
}
