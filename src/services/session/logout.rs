use tracing::info;

use crate::errors::Result;
use crate::services::CommandOutcome;
use crate::store::EntityStore;

/// 登出只移除会话记录，其余集合保持不变
pub async fn logout(store: &mut EntityStore) -> Result<CommandOutcome> {
    if let Some(identity) = store.state().session() {
        info!("Logout {}", identity.name);
    }
    store.end_session().await?;
    Ok(CommandOutcome::message("Logged out"))
}
