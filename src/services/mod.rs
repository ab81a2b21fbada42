//! 课堂命令服务
//!
//! 所有修改都表示为 [`Command`]，由 [`ClassroomService::dispatch`] 统一分派。
//! 分派期间持有存储的异步互斥锁，因此修改严格串行。

pub mod announcements;
pub mod assignments;
pub mod dashboards;
pub mod forum;
pub mod guard;
pub mod materials;
pub mod quizzes;
pub mod session;
pub mod submissions;

use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use ts_rs::TS;

use crate::errors::Result;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::assignments::requests::{CreateAssignmentRequest, DeleteByIdRequest};
use crate::models::dashboards::responses::Dashboard;
use crate::models::forum::requests::PostForumRequest;
use crate::models::materials::requests::CreateMaterialRequest;
use crate::models::quizzes::requests::{CreateQuizRequest, SubmitQuizAnswerRequest};
use crate::models::session::entities::SessionIdentity;
use crate::models::session::requests::LoginRequest;
use crate::models::submissions::requests::{
    DeleteOwnSubmissionRequest, GradeSubmissionRequest, SubmitAssignmentRequest,
};
use crate::store::EntityStore;

/// 修改命令（封闭集合）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(tag = "action", rename_all = "kebab-case")]
#[ts(export, export_to = "../frontend/src/types/generated/command.ts")]
pub enum Command {
    Login(LoginRequest),
    Logout,
    CreateAssignment(CreateAssignmentRequest),
    DeleteAssignment(DeleteByIdRequest),
    CreateMaterial(CreateMaterialRequest),
    DeleteMaterial(DeleteByIdRequest),
    CreateQuiz(CreateQuizRequest),
    DeleteQuiz(DeleteByIdRequest),
    CreateAnnouncement(CreateAnnouncementRequest),
    DeleteAnnouncement(DeleteByIdRequest),
    PostForum(PostForumRequest),
    DeleteForumPost(DeleteByIdRequest),
    SubmitAssignment(SubmitAssignmentRequest),
    DeleteOwnSubmission(DeleteOwnSubmissionRequest),
    SubmitQuizAnswer(SubmitQuizAnswerRequest),
    GradeSubmission(GradeSubmissionRequest),
}

impl Command {
    /// 命令标签，用于日志
    pub fn action(&self) -> &'static str {
        match self {
            Command::Login(_) => "login",
            Command::Logout => "logout",
            Command::CreateAssignment(_) => "create-assignment",
            Command::DeleteAssignment(_) => "delete-assignment",
            Command::CreateMaterial(_) => "create-material",
            Command::DeleteMaterial(_) => "delete-material",
            Command::CreateQuiz(_) => "create-quiz",
            Command::DeleteQuiz(_) => "delete-quiz",
            Command::CreateAnnouncement(_) => "create-announcement",
            Command::DeleteAnnouncement(_) => "delete-announcement",
            Command::PostForum(_) => "post-forum",
            Command::DeleteForumPost(_) => "delete-forum-post",
            Command::SubmitAssignment(_) => "submit-assignment",
            Command::DeleteOwnSubmission(_) => "delete-own-submission",
            Command::SubmitQuizAnswer(_) => "submit-quiz-answer",
            Command::GradeSubmission(_) => "grade-submission",
        }
    }
}

/// 命令执行结果：提示文本，新建实体时附带其 ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/command.ts")]
pub struct CommandOutcome {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CommandOutcome {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: String) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

#[derive(Clone)]
pub struct ClassroomService {
    store: Arc<Mutex<EntityStore>>,
}

impl ClassroomService {
    pub fn new(store: EntityStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// 执行一条命令：校验失败时快照与存储均不变，成功后整体持久化
    pub async fn dispatch(&self, command: Command) -> Result<CommandOutcome> {
        let action = command.action();
        let mut store = self.store.lock().await;
        debug!("Dispatching {}", action);

        let result = match command {
            Command::Login(req) => store.commit(|s| session::login::login(s, req)).await,
            Command::Logout => session::logout::logout(&mut store).await,
            Command::CreateAssignment(req) => {
                store
                    .commit(|s| assignments::create::create_assignment(s, req))
                    .await
            }
            Command::DeleteAssignment(req) => {
                store
                    .commit(|s| assignments::delete::delete_assignment(s, req))
                    .await
            }
            Command::CreateMaterial(req) => {
                store
                    .commit(|s| materials::create::create_material(s, req))
                    .await
            }
            Command::DeleteMaterial(req) => {
                store
                    .commit(|s| materials::delete::delete_material(s, req))
                    .await
            }
            Command::CreateQuiz(req) => {
                store
                    .commit(|s| quizzes::create::create_quiz(s, req))
                    .await
            }
            Command::DeleteQuiz(req) => {
                store
                    .commit(|s| quizzes::delete::delete_quiz(s, req))
                    .await
            }
            Command::CreateAnnouncement(req) => {
                store
                    .commit(|s| announcements::create::create_announcement(s, req))
                    .await
            }
            Command::DeleteAnnouncement(req) => {
                store
                    .commit(|s| announcements::delete::delete_announcement(s, req))
                    .await
            }
            Command::PostForum(req) => store.commit(|s| forum::post::post_forum(s, req)).await,
            Command::DeleteForumPost(req) => {
                store
                    .commit(|s| forum::delete::delete_forum_post(s, req))
                    .await
            }
            Command::SubmitAssignment(req) => {
                store
                    .commit(|s| submissions::submit::submit_assignment(s, req))
                    .await
            }
            Command::DeleteOwnSubmission(req) => {
                store
                    .commit(|s| submissions::delete::delete_own_submission(s, req))
                    .await
            }
            Command::SubmitQuizAnswer(req) => {
                store
                    .commit(|s| quizzes::answer::submit_quiz_answer(s, req))
                    .await
            }
            Command::GradeSubmission(req) => {
                store
                    .commit(|s| submissions::grade::grade_submission(s, req))
                    .await
            }
        };

        match &result {
            Ok(outcome) => info!("{} succeeded: {}", action, outcome.message),
            Err(e) if e.is_user_notice() => warn!("{} rejected: {}", action, e),
            Err(e) => error!("{} failed: {}", action, e),
        }
        result
    }

    /// 当前会话身份
    pub async fn session(&self) -> Option<SessionIdentity> {
        self.store.lock().await.state().session().cloned()
    }

    /// 当前身份对应的视图，截止天数按本地时区计算
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let store = self.store.lock().await;
        dashboards::build_dashboard(store.state(), &Local::now())
    }
}
