use serde::Serialize;
use ts_rs::TS;

use super::entities::EmbeddedFile;

/// 上传结果：可直接放入命令载荷的内嵌文件
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    /// 未提交文件时为空
    pub file: Option<EmbeddedFile>,
    /// 文件大小(字节)
    pub size: i64,
    /// 文件类型
    pub content_type: String,
}
