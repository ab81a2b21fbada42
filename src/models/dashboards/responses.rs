use serde::Serialize;
use ts_rs::TS;

use crate::models::announcements::entities::Announcement;
use crate::models::assignments::entities::Assignment;
use crate::models::forum::entities::ForumPost;
use crate::models::materials::entities::Material;
use crate::models::quizzes::entities::Quiz;
use crate::models::session::entities::SessionIdentity;
use crate::models::submissions::entities::Submission;

/// 论坛帖子视图
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ForumPostView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub post: ForumPost,
    pub can_delete: bool,
}

/// 带集合下标的提交（下标用于评分）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct IndexedSubmission {
    pub index: usize,
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
}

/// 教师视角
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherDashboard {
    pub identity: SessionIdentity,
    pub assignments: Vec<Assignment>,
    pub materials: Vec<Material>,
    pub quizzes: Vec<Quiz>,
    pub announcements: Vec<Announcement>,
    pub forum: Vec<ForumPostView>,
    pub submissions: Vec<IndexedSubmission>,
}

/// 截止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "status", rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub enum DeadlineBadge {
    DaysLeft { days: i64 },
    PastDue,
}

/// 学生视角的作业
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentAssignmentView {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub deadline: Option<DeadlineBadge>,
    pub my_submission: Option<Submission>,
}

/// 学生视角的测验（不含正确答案）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentQuizView {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub created_by: String,
    pub created_at: i64,
}

impl From<&Quiz> for StudentQuizView {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            question: quiz.question.clone(),
            options: quiz.options.clone(),
            created_by: quiz.created_by.clone(),
            created_at: quiz.created_at,
        }
    }
}

/// 成绩条目
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct GradeEntry {
    pub target_title: String,
    pub student_name: String,
    pub grade: String,
}

/// 学生视角
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentDashboard {
    pub identity: SessionIdentity,
    pub assignments: Vec<StudentAssignmentView>,
    pub materials: Vec<Material>,
    pub quizzes: Vec<StudentQuizView>,
    pub announcements: Vec<Announcement>,
    pub forum: Vec<ForumPostView>,
    pub grades: Vec<GradeEntry>,
}

/// 按角色返回的视图
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "role", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub enum Dashboard {
    Teacher(TeacherDashboard),
    Student(StudentDashboard),
}
