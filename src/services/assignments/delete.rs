use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::DeleteByIdRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;

/// 删除作业，同时级联删除该作业的全部提交
pub fn delete_assignment(
    state: &mut ClassroomState,
    req: DeleteByIdRequest,
) -> Result<CommandOutcome> {
    ensure_teacher(state, "delete assignments")?;

    let id = req.id.trim();
    let (removed, cascaded) = state
        .remove_assignment(id)
        .ok_or_else(|| ClassroomError::not_found("Assignment not found"))?;

    info!(
        "Assignment {} deleted with {} submission(s)",
        removed.id, cascaded
    );
    Ok(CommandOutcome::message("Assignment deleted"))
}
