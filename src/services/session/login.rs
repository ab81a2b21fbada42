use tracing::info;

use crate::errors::Result;
use crate::models::session::entities::SessionIdentity;
use crate::models::session::requests::LoginRequest;
use crate::services::CommandOutcome;
use crate::store::ClassroomState;
use crate::utils::validate::validate_display_name;

/// 设置当前身份，已有身份直接替换
pub fn login(state: &mut ClassroomState, req: LoginRequest) -> Result<CommandOutcome> {
    let name = validate_display_name(&req.name)?;
    let identity = SessionIdentity::new(name, req.role);

    info!("Login as {} ({})", identity.name, identity.role);
    let message = format!("Welcome, {}", identity.name);
    state.set_session(Some(identity));
    Ok(CommandOutcome::message(message))
}
