use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;
use crate::utils::validate::required;

/// 按集合下标评分，下标来自教师视图
pub fn grade_submission(
    state: &mut ClassroomState,
    req: GradeSubmissionRequest,
) -> Result<CommandOutcome> {
    ensure_teacher(state, "assign grades")?;
    let grade = required(&req.grade, "Enter grade")?;

    let submission = state
        .set_grade(req.index, grade)
        .ok_or_else(|| ClassroomError::not_found("Submission not found"))?;

    info!("Submission {} graded {:?}", submission.id, submission.grade);
    Ok(CommandOutcome::message("Grade saved"))
}
