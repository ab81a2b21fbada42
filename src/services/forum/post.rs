use tracing::info;

use crate::errors::Result;
use crate::models::forum::entities::ForumPost;
use crate::models::forum::requests::PostForumRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_identity;
use crate::store::ClassroomState;
use crate::utils::validate::required;
use crate::utils::{new_id, now_millis};

/// 任何已登录身份都可以发帖
pub fn post_forum(state: &mut ClassroomState, req: PostForumRequest) -> Result<CommandOutcome> {
    let identity = ensure_identity(state)?;
    let message = required(&req.message, "Enter a message")?;

    let post = ForumPost {
        id: new_id(),
        message,
        user: identity.name,
        created_at: now_millis(),
    };

    info!("Forum post {} by {}", post.id, post.user);
    let id = post.id.clone();
    state.add_forum_post(post);
    Ok(CommandOutcome::created("Posted to forum", id))
}
