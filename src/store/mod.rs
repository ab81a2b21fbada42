//! 实体存储
//!
//! 持有 [`ClassroomState`] 内存快照，每次修改后把全部集合写回存储适配器。

pub mod integrity;
pub mod normalize;
pub mod state;

use tracing::{debug, info};

use crate::errors::Result;
use crate::models::session::entities::SessionIdentity;
use crate::storage::{RecordKey, StorageAdapter};

pub use state::ClassroomState;

pub struct EntityStore {
    adapter: StorageAdapter,
    state: ClassroomState,
}

impl EntityStore {
    /// 从存储加载全部集合，并立即持久化一次以确保所有键存在
    pub async fn open(adapter: StorageAdapter) -> Result<Self> {
        let state = Self::load_state(&adapter).await;
        info!(
            "Classroom state loaded: {} assignments, {} materials, {} quizzes, {} announcements, {} forum posts, {} submissions",
            state.assignments.len(),
            state.materials.len(),
            state.quizzes.len(),
            state.announcements.len(),
            state.forum.len(),
            state.submissions.len()
        );

        let store = Self { adapter, state };
        store.persist().await?;
        Ok(store)
    }

    async fn load_state(adapter: &StorageAdapter) -> ClassroomState {
        let session: Option<SessionIdentity> = adapter.load(RecordKey::Session, None).await;

        ClassroomState {
            session: normalize::normalize_session(session),
            assignments: normalize::normalize_ids(
                adapter.load_list(RecordKey::Assignments).await,
                "assignments",
            ),
            materials: normalize::normalize_ids(
                adapter.load_list(RecordKey::Materials).await,
                "materials",
            ),
            quizzes: normalize::normalize_ids(
                adapter.load_list(RecordKey::Quizzes).await,
                "quizzes",
            ),
            announcements: normalize::normalize_ids(
                adapter.load_list(RecordKey::Announcements).await,
                "announcements",
            ),
            forum: normalize::normalize_ids(adapter.load_list(RecordKey::Forum).await, "forum"),
            submissions: normalize::normalize_ids(
                adapter.load_list(RecordKey::Submissions).await,
                "submissions",
            ),
            quiz_attempts: normalize::normalize_ids(
                adapter.load_list(RecordKey::QuizAttempts).await,
                "quiz_attempts",
            ),
        }
    }

    pub fn state(&self) -> &ClassroomState {
        &self.state
    }

    pub fn adapter(&self) -> &StorageAdapter {
        &self.adapter
    }

    /// 顺序写入全部八条记录，不回滚
    pub async fn persist(&self) -> Result<()> {
        let state = &self.state;
        self.adapter.save(RecordKey::Session, &state.session).await?;
        self.adapter
            .save(RecordKey::Assignments, &state.assignments)
            .await?;
        self.adapter.save(RecordKey::Materials, &state.materials).await?;
        self.adapter.save(RecordKey::Quizzes, &state.quizzes).await?;
        self.adapter
            .save(RecordKey::Announcements, &state.announcements)
            .await?;
        self.adapter.save(RecordKey::Forum, &state.forum).await?;
        self.adapter
            .save(RecordKey::Submissions, &state.submissions)
            .await?;
        self.adapter
            .save(RecordKey::QuizAttempts, &state.quiz_attempts)
            .await?;
        debug!("Classroom snapshot persisted");
        Ok(())
    }

    /// 执行一次修改并持久化
    ///
    /// `mutate` 必须先完成全部校验再修改快照：返回 `Err` 时快照保持原样，也不会写存储。
    pub async fn commit<R>(
        &mut self,
        mutate: impl FnOnce(&mut ClassroomState) -> Result<R>,
    ) -> Result<R> {
        let result = mutate(&mut self.state)?;
        self.persist().await?;
        Ok(result)
    }

    /// 登出：清空内存中的身份并删除会话记录，其余数据保留
    pub async fn end_session(&mut self) -> Result<()> {
        self.state.set_session(None);
        self.adapter.clear(RecordKey::Session).await
    }
}
