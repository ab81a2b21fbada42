use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::assignments::requests::DeleteByIdRequest;
use crate::services::CommandOutcome;
use crate::store::ClassroomState;
use crate::store::integrity::ensure_can_delete_forum_post;

/// 作者本人或教师可删除帖子
pub fn delete_forum_post(
    state: &mut ClassroomState,
    req: DeleteByIdRequest,
) -> Result<CommandOutcome> {
    let id = req.id.trim();
    let post = state
        .find_forum_post(id)
        .ok_or_else(|| ClassroomError::not_found("Forum post not found"))?;
    ensure_can_delete_forum_post(state.session(), post)?;

    if let Some(removed) = state.remove_forum_post(id) {
        info!("Forum post {} deleted", removed.id);
    }
    Ok(CommandOutcome::message("Post deleted"))
}
