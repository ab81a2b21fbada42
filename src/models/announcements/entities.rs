use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::impl_record;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub text: String,
    pub created_by: String,
    pub created_at: i64,
}

impl_record!(Announcement);
