use tracing::info;

use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;
use crate::utils::validate::{required, validate_due_date};
use crate::utils::{new_id, now_millis};

pub fn create_assignment(
    state: &mut ClassroomState,
    req: CreateAssignmentRequest,
) -> Result<CommandOutcome> {
    let teacher = ensure_teacher(state, "create assignments")?;

    let title = required(&req.title, "Fill all fields")?;
    let description = required(&req.description, "Fill all fields")?;
    let due = validate_due_date(&req.due)?;

    let (file_data, file_name) = match req.file {
        Some(file) => (Some(file.file_data), Some(file.file_name)),
        None => (None, None),
    };

    let assignment = Assignment {
        id: new_id(),
        title,
        description,
        due,
        file_data,
        file_name,
        created_by: teacher.name,
        created_at: now_millis(),
    };

    info!("Assignment {} created by {}", assignment.id, assignment.created_by);
    let id = assignment.id.clone();
    state.add_assignment(assignment);
    Ok(CommandOutcome::created("Assignment created", id))
}
