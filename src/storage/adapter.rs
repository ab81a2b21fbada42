use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::storage::KeyValueStorage;

/// 持久化的八条记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Session,
    Assignments,
    Materials,
    Quizzes,
    Announcements,
    Forum,
    Submissions,
    QuizAttempts,
}

impl RecordKey {
    pub const ALL: [RecordKey; 8] = [
        RecordKey::Session,
        RecordKey::Assignments,
        RecordKey::Materials,
        RecordKey::Quizzes,
        RecordKey::Announcements,
        RecordKey::Forum,
        RecordKey::Submissions,
        RecordKey::QuizAttempts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::Session => "user",
            RecordKey::Assignments => "assignments",
            RecordKey::Materials => "materials",
            RecordKey::Quizzes => "quizzes",
            RecordKey::Announcements => "announcements",
            RecordKey::Forum => "forum",
            RecordKey::Submissions => "submissions",
            RecordKey::QuizAttempts => "quiz_attempts",
        }
    }
}

/// 存储适配器：命名记录的类型化读写
///
/// `load` 永不失败：记录缺失、后端读取出错或内容无法解析时都返回调用方给出的默认值，
/// 保证存储损坏后界面仍可用。`save` / `clear` 的错误会向上传递。
#[derive(Clone)]
pub struct StorageAdapter {
    backend: Arc<dyn KeyValueStorage>,
    prefix: String,
}

impl StorageAdapter {
    pub fn new(backend: Arc<dyn KeyValueStorage>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    /// 带前缀的完整键名，如 `vc_assignments`
    pub fn key(&self, key: RecordKey) -> String {
        format!("{}{}", self.prefix, key.as_str())
    }

    /// 读取原始文本；缺失或后端出错时返回 `None`
    async fn read_raw(&self, full_key: &str) -> Option<String> {
        match self.backend.get_raw(full_key).await {
            Ok(Some(raw)) => Some(raw),
            Ok(None) => {
                debug!("No stored value for {}, using default", full_key);
                None
            }
            Err(e) => {
                warn!("Failed to read {}: {}, using default", full_key, e);
                None
            }
        }
    }

    pub async fn load<T: DeserializeOwned>(&self, key: RecordKey, default: T) -> T {
        let full_key = self.key(key);
        let Some(raw) = self.read_raw(&full_key).await else {
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Stored value for {} is corrupt ({}), using default",
                    full_key, e
                );
                default
            }
        }
    }

    /// 逐条解析集合记录：无法解析的条目单独丢弃，其余保留
    ///
    /// 整体不是数组（缺失、损坏、`null`）时返回空集合。
    pub async fn load_list<T: DeserializeOwned>(&self, key: RecordKey) -> Vec<T> {
        let full_key = self.key(key);
        let entries: Vec<serde_json::Value> = self.load(key, Vec::new()).await;

        let total = entries.len();
        let items: Vec<T> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("Dropping malformed entry {} of {}: {}", index, full_key, e);
                    None
                }
            })
            .collect();

        if items.len() < total {
            warn!(
                "{} of {} entries in {} could not be parsed",
                total - items.len(),
                total,
                full_key
            );
        }
        items
    }

    pub async fn save<T: Serialize + ?Sized + Sync>(
        &self,
        key: RecordKey,
        value: &T,
    ) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(&self.key(key), raw).await
    }

    pub async fn clear(&self, key: RecordKey) -> Result<()> {
        self.backend.remove(&self.key(key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::announcements::entities::Announcement;
    use crate::models::assignments::entities::Assignment;
    use crate::models::forum::entities::ForumPost;
    use crate::models::materials::entities::Material;
    use crate::models::quizzes::entities::{Quiz, QuizAttempt};
    use crate::models::session::entities::{Role, SessionIdentity};
    use crate::models::submissions::entities::{Submission, SubmissionKind};
    use crate::storage::backends::memory::MemoryStorage;
    use std::fmt::Debug;

    const PDF: &str = "data:application/pdf;base64,JVBERi0xLjQ=";

    async fn assert_round_trip<T>(adapter: &StorageAdapter, key: RecordKey, written: Vec<T>)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug + Sync,
    {
        adapter.save(key, &written).await.unwrap();
        let read: Vec<T> = adapter.load(key, Vec::new()).await;
        assert_eq!(read, written, "{} changed after round trip", adapter.key(key));
    }

    fn adapter() -> (Arc<MemoryStorage>, StorageAdapter) {
        let backend = Arc::new(MemoryStorage::new());
        let adapter = StorageAdapter::new(backend.clone(), "vc_");
        (backend, adapter)
    }

    #[test]
    fn test_key_names() {
        let (_, adapter) = adapter();
        let keys: Vec<String> = RecordKey::ALL.iter().map(|k| adapter.key(*k)).collect();
        assert_eq!(
            keys,
            vec![
                "vc_user",
                "vc_assignments",
                "vc_materials",
                "vc_quizzes",
                "vc_announcements",
                "vc_forum",
                "vc_submissions",
                "vc_quiz_attempts",
            ]
        );
    }

    #[tokio::test]
    async fn test_round_trip_is_deeply_equal() {
        let (_, adapter) = adapter();

        let identity = Some(SessionIdentity::new("Alice", Role::Teacher));
        adapter.save(RecordKey::Session, &identity).await.unwrap();
        let read: Option<SessionIdentity> = adapter.load(RecordKey::Session, None).await;
        assert_eq!(read, identity);

        let assignments = vec![
            Assignment {
                id: "a1".into(),
                title: "HW1".into(),
                description: "Read ch.1".into(),
                due: "2099-01-01".into(),
                file_data: Some(PDF.into()),
                file_name: Some("hw1.pdf".into()),
                created_by: "Alice".into(),
                created_at: 1_700_000_000_000,
            },
            Assignment {
                id: "a2".into(),
                title: "HW2".into(),
                ..Default::default()
            },
        ];
        assert_round_trip(&adapter, RecordKey::Assignments, assignments).await;

        let materials = vec![Material {
            id: "m1".into(),
            title: "Slides".into(),
            file_data: Some("data:text/plain;base64,aGk=".into()),
            file_name: Some("notes.txt".into()),
            created_by: "Alice".into(),
            created_at: 2,
        }];
        assert_round_trip(&adapter, RecordKey::Materials, materials).await;

        let quizzes = vec![Quiz {
            id: "q1".into(),
            question: "2+2?".into(),
            options: vec!["3".into(), "4".into(), "5".into()],
            answer_text: "4".into(),
            created_by: "Alice".into(),
            created_at: 3,
        }];
        assert_round_trip(&adapter, RecordKey::Quizzes, quizzes).await;

        let announcements = vec![Announcement {
            id: "n1".into(),
            title: "Welcome".into(),
            text: "Class starts Monday".into(),
            created_by: "Alice".into(),
            created_at: 4,
        }];
        assert_round_trip(&adapter, RecordKey::Announcements, announcements).await;

        let forum = vec![ForumPost {
            id: "p1".into(),
            message: "Is HW1 due Friday?".into(),
            user: "Bob".into(),
            created_at: 5,
        }];
        assert_round_trip(&adapter, RecordKey::Forum, forum).await;

        let submissions = vec![
            Submission {
                id: "s2".into(),
                kind: SubmissionKind::Quiz,
                target_id: "q1".into(),
                target_title: "2+2?".into(),
                student_name: "Bob".into(),
                answer: Some("4".into()),
                grade: Some("Correct".into()),
                submitted_at: 7,
                ..Default::default()
            },
            Submission {
                id: "s1".into(),
                kind: SubmissionKind::Assignment,
                target_id: "a1".into(),
                target_title: "HW1".into(),
                student_name: "Bob".into(),
                file_data: Some(PDF.into()),
                file_name: Some("answers.pdf".into()),
                grade: Some("A-".into()),
                submitted_at: 6,
                ..Default::default()
            },
        ];
        assert_round_trip(&adapter, RecordKey::Submissions, submissions).await;

        let attempts = vec![QuizAttempt {
            id: "t1".into(),
            quiz_id: "q1".into(),
            student_name: "Bob".into(),
            selected: "4".into(),
            correct: true,
            at: 7,
        }];
        assert_round_trip(&adapter, RecordKey::QuizAttempts, attempts).await;
    }

    #[tokio::test]
    async fn test_load_list_drops_only_malformed_entries() {
        let (backend, adapter) = adapter();
        let raw = r#"[{"id":"p1","msg":"hi","user":"Bob"},{"id":"p2","msg":42},"junk"]"#;
        backend.set_raw("vc_forum", raw.into()).await.unwrap();

        let posts: Vec<ForumPost> = adapter.load_list(RecordKey::Forum).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(posts[0].message, "hi");

        backend.set_raw("vc_forum", "{\"id\":\"p1\"}".into()).await.unwrap();
        let posts: Vec<ForumPost> = adapter.load_list(RecordKey::Forum).await;
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_missing_and_corrupt_fall_back_to_default() {
        let (backend, adapter) = adapter();
        let missing: Vec<Assignment> = adapter.load(RecordKey::Assignments, Vec::new()).await;
        assert!(missing.is_empty());

        backend
            .set_raw("vc_assignments", "{not json".into())
            .await
            .unwrap();
        let corrupt: Vec<Assignment> = adapter.load(RecordKey::Assignments, Vec::new()).await;
        assert!(corrupt.is_empty());

        backend.set_raw("vc_forum", "null".into()).await.unwrap();
        let null: Vec<Assignment> = adapter.load(RecordKey::Forum, Vec::new()).await;
        assert!(null.is_empty());
    }

    #[tokio::test]
    async fn test_clear_removes_record() {
        let (backend, adapter) = adapter();
        let identity = Some(SessionIdentity::new("Bob", Role::Student));
        adapter.save(RecordKey::Session, &identity).await.unwrap();
        adapter.clear(RecordKey::Session).await.unwrap();
        assert_eq!(backend.get_raw("vc_user").await.unwrap(), None);
    }
}
