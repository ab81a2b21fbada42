use serde::Deserialize;
use ts_rs::TS;

/// 创建测验请求，options 为逗号分隔的原始输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuizRequest {
    pub question: String,
    pub options: String,
    pub answer: String,
}

/// 学生作答
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct SubmitQuizAnswerRequest {
    pub quiz_id: String,
    pub answer: String,
}
