//! 按角色构建视图
//!
//! 教师看到全部数据与提交下标；学生看到按截止日期排序的作业、
//! 自己的提交与成绩，测验不含正确答案。

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::errors::{ClassroomError, Result};
use crate::models::dashboards::responses::{
    Dashboard, DeadlineBadge, ForumPostView, GradeEntry, IndexedSubmission,
    StudentAssignmentView, StudentDashboard, StudentQuizView, TeacherDashboard,
};
use crate::models::session::entities::{Role, SessionIdentity};
use crate::models::submissions::entities::SubmissionKind;
use crate::store::ClassroomState;
use crate::store::integrity::can_delete_forum_post;

const MILLIS_PER_DAY: i64 = 86_400_000;
const NOT_GRADED: &str = "Not graded";

pub fn build_dashboard<Tz: TimeZone>(
    state: &ClassroomState,
    now: &DateTime<Tz>,
) -> Result<Dashboard> {
    let identity = state
        .session()
        .cloned()
        .ok_or_else(|| ClassroomError::authentication("Not logged in"))?;

    Ok(match identity.role {
        Role::Teacher => Dashboard::Teacher(teacher_dashboard(state, identity)),
        Role::Student => Dashboard::Student(student_dashboard(state, identity, now)),
    })
}

fn forum_views(state: &ClassroomState, identity: &SessionIdentity) -> Vec<ForumPostView> {
    state
        .forum()
        .iter()
        .map(|post| ForumPostView {
            can_delete: can_delete_forum_post(Some(identity), post),
            post: post.clone(),
        })
        .collect()
}

pub fn teacher_dashboard(state: &ClassroomState, identity: SessionIdentity) -> TeacherDashboard {
    let forum = forum_views(state, &identity);
    TeacherDashboard {
        assignments: state.assignments().to_vec(),
        materials: state.materials().to_vec(),
        quizzes: state.quizzes().to_vec(),
        announcements: state.announcements().to_vec(),
        forum,
        submissions: state
            .submissions()
            .iter()
            .enumerate()
            .map(|(index, submission)| IndexedSubmission {
                index,
                submission: submission.clone(),
            })
            .collect(),
        identity,
    }
}

pub fn student_dashboard<Tz: TimeZone>(
    state: &ClassroomState,
    identity: SessionIdentity,
    now: &DateTime<Tz>,
) -> StudentDashboard {
    let mut assignments: Vec<StudentAssignmentView> = state
        .assignments()
        .iter()
        .map(|assignment| StudentAssignmentView {
            deadline: deadline_badge(&assignment.due, now),
            // 提交按最新在前存放，第一条即最近一次
            my_submission: state
                .submissions()
                .iter()
                .find(|s| {
                    s.targets(SubmissionKind::Assignment, &assignment.id)
                        && s.student_name == identity.name
                })
                .cloned(),
            assignment: assignment.clone(),
        })
        .collect();
    assignments.sort_by_key(|view| parse_due(&view.assignment.due));

    let grades = state
        .submissions()
        .iter()
        .filter(|s| s.student_name == identity.name)
        .map(|s| GradeEntry {
            target_title: s.target_title.clone(),
            student_name: s.student_name.clone(),
            grade: s.grade.clone().unwrap_or_else(|| NOT_GRADED.to_string()),
        })
        .collect();

    StudentDashboard {
        assignments,
        materials: state.materials().to_vec(),
        quizzes: state.quizzes().iter().map(StudentQuizView::from).collect(),
        announcements: state.announcements().to_vec(),
        forum: forum_views(state, &identity),
        grades,
        identity,
    }
}

fn parse_due(due: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due.trim(), "%Y-%m-%d").ok()
}

/// 截止日当天 23:59:59.999（`now` 所在时区）减去当前时间，向下取整为天数
pub fn deadline_badge<Tz: TimeZone>(due: &str, now: &DateTime<Tz>) -> Option<DeadlineBadge> {
    let end_of_day = parse_due(due)?.and_hms_milli_opt(23, 59, 59, 999)?;
    let end = end_of_day
        .and_local_timezone(now.timezone())
        .earliest()?;

    let days = (end.timestamp_millis() - now.timestamp_millis()).div_euclid(MILLIS_PER_DAY);
    Some(if days >= 0 {
        DeadlineBadge::DaysLeft { days }
    } else {
        DeadlineBadge::PastDue
    })
}
