use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::DeleteByIdRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;

pub fn delete_announcement(
    state: &mut ClassroomState,
    req: DeleteByIdRequest,
) -> Result<CommandOutcome> {
    ensure_teacher(state, "delete announcements")?;

    let removed = state
        .remove_announcement(req.id.trim())
        .ok_or_else(|| ClassroomError::not_found("Announcement not found"))?;

    info!("Announcement {} deleted", removed.id);
    Ok(CommandOutcome::message("Announcement deleted"))
}
