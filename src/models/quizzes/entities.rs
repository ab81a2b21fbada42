use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::impl_record;

/// 单题测验
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Quiz {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer_text: String,
    pub created_by: String,
    pub created_at: i64,
}

/// 答题记录（只追加，不被任何视图读取）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub student_name: String,
    pub selected: String,
    pub correct: bool,
    pub at: i64,
}

impl_record!(Quiz, QuizAttempt);

impl Quiz {
    /// 精确匹配正确答案
    pub fn is_correct(&self, answer: &str) -> bool {
        self.answer_text == answer
    }
}

/// 将逗号分隔的选项拆分为列表，去除空白项
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
