use tracing::info;

use crate::errors::Result;
use crate::models::announcements::entities::Announcement;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;
use crate::utils::validate::required;
use crate::utils::{new_id, now_millis};

pub fn create_announcement(
    state: &mut ClassroomState,
    req: CreateAnnouncementRequest,
) -> Result<CommandOutcome> {
    let teacher = ensure_teacher(state, "post announcements")?;

    let announcement = Announcement {
        id: new_id(),
        title: required(&req.title, "Fill all fields")?,
        text: required(&req.text, "Fill all fields")?,
        created_by: teacher.name,
        created_at: now_millis(),
    };

    info!("Announcement {} posted", announcement.id);
    let id = announcement.id.clone();
    state.add_announcement(announcement);
    Ok(CommandOutcome::created("Announcement posted", id))
}
