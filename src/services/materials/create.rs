use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::materials::entities::Material;
use crate::models::materials::requests::CreateMaterialRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;
use crate::utils::validate::required;
use crate::utils::{new_id, now_millis};

pub fn create_material(
    state: &mut ClassroomState,
    req: CreateMaterialRequest,
) -> Result<CommandOutcome> {
    let teacher = ensure_teacher(state, "upload materials")?;

    let title = required(&req.title, "Enter a title")?;
    let file = req
        .file
        .filter(|f| !f.file_data.is_empty())
        .ok_or_else(|| ClassroomError::validation("Select a file"))?;

    let material = Material {
        id: new_id(),
        title,
        file_data: Some(file.file_data),
        file_name: Some(file.file_name),
        created_by: teacher.name,
        created_at: now_millis(),
    };

    info!("Material {} uploaded by {}", material.id, material.created_by);
    let id = material.id.clone();
    state.add_material(material);
    Ok(CommandOutcome::created("Material uploaded", id))
}
