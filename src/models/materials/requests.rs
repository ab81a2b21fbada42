use serde::Deserialize;
use ts_rs::TS;

use crate::models::files::entities::EmbeddedFile;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/material.ts")]
pub struct CreateMaterialRequest {
    pub title: String,
    #[serde(default)]
    pub file: Option<EmbeddedFile>,
}
