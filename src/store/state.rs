use crate::models::announcements::entities::Announcement;
use crate::models::assignments::entities::Assignment;
use crate::models::forum::entities::ForumPost;
use crate::models::materials::entities::Material;
use crate::models::quizzes::entities::{Quiz, QuizAttempt};
use crate::models::session::entities::SessionIdentity;
use crate::models::submissions::entities::{Submission, SubmissionKind};
use crate::store::integrity;

/// 课堂全部集合与当前会话身份的内存快照
///
/// 字段只读暴露；所有修改走具名方法，新建条目插入到集合头部（最新在前）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassroomState {
    pub(crate) session: Option<SessionIdentity>,
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) materials: Vec<Material>,
    pub(crate) quizzes: Vec<Quiz>,
    pub(crate) announcements: Vec<Announcement>,
    pub(crate) forum: Vec<ForumPost>,
    pub(crate) submissions: Vec<Submission>,
    pub(crate) quiz_attempts: Vec<QuizAttempt>,
}

impl ClassroomState {
    pub fn session(&self) -> Option<&SessionIdentity> {
        self.session.as_ref()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn forum(&self) -> &[ForumPost] {
        &self.forum
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn quiz_attempts(&self) -> &[QuizAttempt] {
        &self.quiz_attempts
    }

    pub fn find_assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn find_quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn find_forum_post(&self, id: &str) -> Option<&ForumPost> {
        self.forum.iter().find(|p| p.id == id)
    }

    pub fn set_session(&mut self, identity: Option<SessionIdentity>) {
        self.session = identity;
    }

    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.insert(0, assignment);
    }

    /// 删除作业并级联删除其提交，返回 (被删作业, 级联删除的提交数)
    pub fn remove_assignment(&mut self, id: &str) -> Option<(Assignment, usize)> {
        let pos = self.assignments.iter().position(|a| a.id == id)?;
        let removed = self.assignments.remove(pos);
        let cascaded = integrity::cascade_submissions(
            &mut self.submissions,
            SubmissionKind::Assignment,
            &removed.id,
        );
        Some((removed, cascaded))
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(0, material);
    }

    pub fn remove_material(&mut self, id: &str) -> Option<Material> {
        let pos = self.materials.iter().position(|m| m.id == id)?;
        Some(self.materials.remove(pos))
    }

    pub fn add_quiz(&mut self, quiz: Quiz) {
        self.quizzes.insert(0, quiz);
    }

    /// 删除测验并级联删除其提交
    pub fn remove_quiz(&mut self, id: &str) -> Option<(Quiz, usize)> {
        let pos = self.quizzes.iter().position(|q| q.id == id)?;
        let removed = self.quizzes.remove(pos);
        let cascaded = integrity::cascade_submissions(
            &mut self.submissions,
            SubmissionKind::Quiz,
            &removed.id,
        );
        Some((removed, cascaded))
    }

    pub fn add_announcement(&mut self, announcement: Announcement) {
        self.announcements.insert(0, announcement);
    }

    pub fn remove_announcement(&mut self, id: &str) -> Option<Announcement> {
        let pos = self.announcements.iter().position(|a| a.id == id)?;
        Some(self.announcements.remove(pos))
    }

    pub fn add_forum_post(&mut self, post: ForumPost) {
        self.forum.insert(0, post);
    }

    pub fn remove_forum_post(&mut self, id: &str) -> Option<ForumPost> {
        let pos = self.forum.iter().position(|p| p.id == id)?;
        Some(self.forum.remove(pos))
    }

    pub fn add_submission(&mut self, submission: Submission) {
        self.submissions.insert(0, submission);
    }

    pub fn remove_own_submissions(&mut self, assignment_id: &str, student_name: &str) -> usize {
        integrity::remove_own_submissions(&mut self.submissions, assignment_id, student_name)
    }

    /// 设置第 index 条提交的成绩；下标越界时返回 `None`
    pub fn set_grade(&mut self, index: usize, grade: String) -> Option<&Submission> {
        let submission = self.submissions.get_mut(index)?;
        submission.grade = Some(grade);
        Some(submission)
    }

    pub fn record_quiz_attempt(&mut self, attempt: QuizAttempt) {
        self.quiz_attempts.insert(0, attempt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(id: &str) -> Assignment {
        Assignment {
            id: id.into(),
            title: format!("title-{id}"),
            ..Default::default()
        }
    }

    fn submission(id: &str, kind: SubmissionKind, target: &str) -> Submission {
        Submission {
            id: id.into(),
            kind,
            target_id: target.into(),
            student_name: "Bob".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_entries_go_first() {
        let mut state = ClassroomState::default();
        state.add_assignment(assignment("a1"));
        state.add_assignment(assignment("a2"));
        let ids: Vec<&str> = state.assignments().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a1"]);
    }

    #[test]
    fn test_remove_assignment_cascades() {
        let mut state = ClassroomState::default();
        state.add_assignment(assignment("a1"));
        state.add_assignment(assignment("a2"));
        state.add_submission(submission("s1", SubmissionKind::Assignment, "a1"));
        state.add_submission(submission("s2", SubmissionKind::Assignment, "a2"));
        state.add_submission(submission("s3", SubmissionKind::Quiz, "a1"));

        let (removed, cascaded) = state.remove_assignment("a1").unwrap();
        assert_eq!(removed.id, "a1");
        assert_eq!(cascaded, 1);
        assert!(state.find_assignment("a1").is_none());
        let ids: Vec<&str> = state.submissions().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s2"]);

        assert!(state.remove_assignment("a1").is_none());
    }

    #[test]
    fn test_remove_quiz_cascades() {
        let mut state = ClassroomState::default();
        state.add_quiz(Quiz {
            id: "q1".into(),
            ..Default::default()
        });
        state.add_submission(submission("s1", SubmissionKind::Quiz, "q1"));
        state.add_submission(submission("s2", SubmissionKind::Assignment, "q1"));

        let (_, cascaded) = state.remove_quiz("q1").unwrap();
        assert_eq!(cascaded, 1);
        assert_eq!(state.submissions().len(), 1);
        assert_eq!(state.submissions()[0].id, "s2");
    }

    #[test]
    fn test_set_grade_touches_only_target() {
        let mut state = ClassroomState::default();
        state.add_submission(submission("s1", SubmissionKind::Assignment, "a1"));
        state.add_submission(submission("s2", SubmissionKind::Assignment, "a1"));
        let before = state.clone();

        let graded = state.set_grade(1, "A".into()).unwrap();
        assert_eq!(graded.id, "s1");

        let mut expected = before.submissions[1].clone();
        expected.grade = Some("A".into());
        assert_eq!(state.submissions()[1], expected);
        assert_eq!(state.submissions()[0], before.submissions[0]);

        assert!(state.set_grade(5, "B".into()).is_none());
    }
}
