use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::submissions::entities::{Submission, SubmissionKind};
use crate::models::submissions::requests::SubmitAssignmentRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_student;
use crate::store::ClassroomState;
use crate::utils::file_magic::PDF_MIME;
use crate::utils::{new_id, now_millis, validate_magic_bytes};

/// 学生提交作业文件，仅接受 PDF
///
/// 同一学生可多次提交，每次都会新增一条记录。
pub fn submit_assignment(
    state: &mut ClassroomState,
    req: SubmitAssignmentRequest,
) -> Result<CommandOutcome> {
    let student = ensure_student(state, "Please login as a student to submit")?;

    let file = req
        .file
        .filter(|f| !f.file_data.is_empty())
        .ok_or_else(|| ClassroomError::validation("Choose a PDF file first."))?;
    if file.mime_type() != Some(PDF_MIME) {
        return Err(ClassroomError::validation("Only PDF allowed."));
    }
    let bytes = file
        .decode()
        .ok_or_else(|| ClassroomError::validation("Only PDF allowed."))?;
    if !validate_magic_bytes(&bytes, ".pdf") {
        return Err(ClassroomError::validation(
            "File content does not match its extension",
        ));
    }

    let assignment = state
        .find_assignment(req.assignment_id.trim())
        .ok_or_else(|| ClassroomError::not_found("Assignment not found"))?;

    let submission = Submission {
        id: new_id(),
        kind: SubmissionKind::Assignment,
        target_id: assignment.id.clone(),
        target_title: assignment.title.clone(),
        student_name: student.name,
        file_data: Some(file.file_data),
        file_name: Some(file.file_name),
        answer: None,
        grade: None,
        submitted_at: now_millis(),
    };

    info!(
        "Submission {} for assignment {} from {}",
        submission.id, submission.target_id, submission.student_name
    );
    let id = submission.id.clone();
    state.add_submission(submission);
    Ok(CommandOutcome::created("Submitted!", id))
}
