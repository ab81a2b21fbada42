use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::submissions::requests::DeleteOwnSubmissionRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_student;
use crate::store::ClassroomState;

/// 学生撤回自己对某作业的全部提交
pub fn delete_own_submission(
    state: &mut ClassroomState,
    req: DeleteOwnSubmissionRequest,
) -> Result<CommandOutcome> {
    let student = ensure_student(state, "Please login as a student to submit")?;
    let assignment_id = req.assignment_id.trim();

    let removed = state.remove_own_submissions(assignment_id, &student.name);
    if removed == 0 {
        return Err(ClassroomError::not_found("Submission not found"));
    }

    info!(
        "{} withdrew {} submission(s) for assignment {}",
        student.name, removed, assignment_id
    );
    Ok(CommandOutcome::message("Submission deleted"))
}
