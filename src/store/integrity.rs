//! 引用完整性与归属规则
//!
//! 删除作业/测验时级联删除其提交；论坛帖子仅作者或教师可删；
//! 学生只能撤回自己的作业提交。

use crate::errors::{ClassroomError, Result};
use crate::models::forum::entities::ForumPost;
use crate::models::session::entities::SessionIdentity;
use crate::models::submissions::entities::{Submission, SubmissionKind};

/// 删除指向 (kind, target_id) 的全部提交，返回删除数量
pub fn cascade_submissions(
    submissions: &mut Vec<Submission>,
    kind: SubmissionKind,
    target_id: &str,
) -> usize {
    let before = submissions.len();
    submissions.retain(|s| !s.targets(kind, target_id));
    before - submissions.len()
}

/// 删除某学生对某作业的全部提交，返回删除数量
pub fn remove_own_submissions(
    submissions: &mut Vec<Submission>,
    assignment_id: &str,
    student_name: &str,
) -> usize {
    let before = submissions.len();
    submissions.retain(|s| {
        !(s.targets(SubmissionKind::Assignment, assignment_id) && s.student_name == student_name)
    });
    before - submissions.len()
}

/// 当前身份能否删除该帖子
pub fn can_delete_forum_post(identity: Option<&SessionIdentity>, post: &ForumPost) -> bool {
    identity.is_some_and(|me| me.is_teacher() || post.user == me.name)
}

/// 删除帖子前的权限检查
pub fn ensure_can_delete_forum_post(
    identity: Option<&SessionIdentity>,
    post: &ForumPost,
) -> Result<()> {
    match identity {
        None => Err(ClassroomError::authentication("Not logged in")),
        Some(_) if can_delete_forum_post(identity, post) => Ok(()),
        Some(_) => Err(ClassroomError::authorization(
            "You can only delete your own forum posts",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::entities::Role;

    fn submission(id: &str, kind: SubmissionKind, target: &str, student: &str) -> Submission {
        Submission {
            id: id.into(),
            kind,
            target_id: target.into(),
            student_name: student.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cascade_only_touches_matching_kind_and_target() {
        let mut subs = vec![
            submission("1", SubmissionKind::Assignment, "x", "Bob"),
            submission("2", SubmissionKind::Quiz, "x", "Bob"),
            submission("3", SubmissionKind::Assignment, "y", "Bob"),
            submission("4", SubmissionKind::Assignment, "x", "Carol"),
        ];
        let removed = cascade_submissions(&mut subs, SubmissionKind::Assignment, "x");
        assert_eq!(removed, 2);
        let ids: Vec<&str> = subs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_remove_own_submissions_matches_student() {
        let mut subs = vec![
            submission("1", SubmissionKind::Assignment, "x", "Bob"),
            submission("2", SubmissionKind::Assignment, "x", "Carol"),
            submission("3", SubmissionKind::Quiz, "x", "Bob"),
        ];
        assert_eq!(remove_own_submissions(&mut subs, "x", "Bob"), 1);
        let ids: Vec<&str> = subs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_forum_permissions() {
        let post = ForumPost {
            id: "p1".into(),
            message: "hi".into(),
            user: "Bob".into(),
            created_at: 0,
        };
        let bob = SessionIdentity::new("Bob", Role::Student);
        let carol = SessionIdentity::new("Carol", Role::Student);
        let alice = SessionIdentity::new("Alice", Role::Teacher);

        assert!(ensure_can_delete_forum_post(Some(&bob), &post).is_ok());
        assert!(ensure_can_delete_forum_post(Some(&alice), &post).is_ok());
        assert_eq!(
            ensure_can_delete_forum_post(Some(&carol), &post).unwrap_err().code(),
            "E010"
        );
        assert_eq!(
            ensure_can_delete_forum_post(None, &post).unwrap_err().code(),
            "E009"
        );
    }
}
