use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::DeleteByIdRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;

/// 删除测验，同时级联删除该测验的全部答题提交
pub fn delete_quiz(state: &mut ClassroomState, req: DeleteByIdRequest) -> Result<CommandOutcome> {
    ensure_teacher(state, "delete quizzes")?;

    let (removed, cascaded) = state
        .remove_quiz(req.id.trim())
        .ok_or_else(|| ClassroomError::not_found("Quiz not found"))?;

    info!("Quiz {} deleted with {} submission(s)", removed.id, cascaded);
    Ok(CommandOutcome::message("Quiz deleted"))
}
