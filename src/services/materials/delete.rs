use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::DeleteByIdRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;

pub fn delete_material(
    state: &mut ClassroomState,
    req: DeleteByIdRequest,
) -> Result<CommandOutcome> {
    ensure_teacher(state, "delete materials")?;

    let removed = state
        .remove_material(req.id.trim())
        .ok_or_else(|| ClassroomError::not_found("Material not found"))?;

    info!("Material {} deleted", removed.id);
    Ok(CommandOutcome::message("Material deleted"))
}
