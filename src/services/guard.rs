//! 命令前置检查：当前身份与角色

use crate::errors::{ClassroomError, Result};
use crate::models::session::entities::SessionIdentity;
use crate::store::ClassroomState;

/// 需要已登录身份
pub fn ensure_identity(state: &ClassroomState) -> Result<SessionIdentity> {
    state
        .session()
        .cloned()
        .ok_or_else(|| ClassroomError::authentication("Not logged in"))
}

/// 需要教师身份，`action` 用于提示文本
pub fn ensure_teacher(state: &ClassroomState, action: &str) -> Result<SessionIdentity> {
    let identity = ensure_identity(state)?;
    if !identity.is_teacher() {
        return Err(ClassroomError::authorization(format!(
            "Only teachers can {action}"
        )));
    }
    Ok(identity)
}

/// 需要学生身份，未满足时返回 `notice`
pub fn ensure_student(state: &ClassroomState, notice: &str) -> Result<SessionIdentity> {
    let identity = state
        .session()
        .cloned()
        .ok_or_else(|| ClassroomError::authentication(notice))?;
    if !identity.is_student() {
        return Err(ClassroomError::authorization(notice));
    }
    Ok(identity)
}
