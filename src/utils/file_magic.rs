//! 文件类型识别：扩展名 -> MIME，以及魔术字节校验

pub const PDF_MIME: &str = "application/pdf";
const OCTET_STREAM: &str = "application/octet-stream";

/// 提取小写扩展名（含点号），如 "HW1.PDF" -> ".pdf"
pub fn extension_of(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// 根据扩展名推断 MIME 类型
pub fn guess_mime_type(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        ".pdf" => PDF_MIME,
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".txt" => "text/plain",
        ".md" => "text/markdown",
        ".csv" => "text/csv",
        ".json" => "application/json",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".zip" => "application/zip",
        _ => OCTET_STREAM,
    }
}

/// 验证文件内容的魔术字节是否与扩展名匹配
///
/// 文本类格式不检查魔术字节；未知格式一律拒绝。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".pdf" => data.starts_with(b"%PDF"),
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        // OOXML 与 zip 同为 ZIP 容器
        ".docx" | ".pptx" | ".xlsx" | ".zip" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        ".txt" | ".md" | ".csv" | ".json" => true,
        _ => false,
    }
}
