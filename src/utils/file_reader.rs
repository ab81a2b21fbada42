//! 上传文件 -> 可嵌入记录的 data URL

use crate::config::UploadConfig;
use crate::errors::{ClassroomError, Result};
use crate::models::files::entities::EmbeddedFile;
use crate::utils::file_magic::{extension_of, guess_mime_type, validate_magic_bytes};

/// 读取到内存中的上传文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    /// 客户端声明的 MIME，可为空
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// 有效 MIME：优先使用声明值，否则按扩展名推断
    pub fn mime_type(&self) -> String {
        self.content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| guess_mime_type(&extension_of(&self.file_name)).to_string())
    }
}

/// 将上传文件编码为内嵌文件；未提供文件时返回 `None`
pub fn embed_upload(
    file: Option<UploadedFile>,
    config: &UploadConfig,
) -> Result<Option<EmbeddedFile>> {
    let Some(file) = file else {
        return Ok(None);
    };

    let extension = extension_of(&file.file_name);
    if !config
        .allowed_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&extension))
    {
        return Err(ClassroomError::validation("File type not allowed"));
    }
    if file.bytes.len() > config.max_size {
        return Err(ClassroomError::validation("File size exceeds the limit"));
    }
    if !validate_magic_bytes(&file.bytes, &extension) {
        return Err(ClassroomError::validation(
            "File content does not match its extension",
        ));
    }

    let mime = file.mime_type();
    tracing::debug!(
        "Embedding upload {} ({} bytes, {})",
        file.file_name,
        file.bytes.len(),
        mime
    );
    Ok(Some(EmbeddedFile::from_bytes(
        file.file_name,
        &mime,
        &file.bytes,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: None,
            bytes: b"%PDF-1.4 minimal".to_vec(),
        }
    }

    #[test]
    fn test_no_file_yields_none() {
        assert_eq!(embed_upload(None, &UploadConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_pdf_is_embedded_with_guessed_mime() {
        let embedded = embed_upload(Some(pdf("hw1.pdf")), &UploadConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(embedded.file_name, "hw1.pdf");
        assert_eq!(embedded.mime_type(), Some("application/pdf"));
        assert_eq!(embedded.decode().unwrap(), b"%PDF-1.4 minimal".to_vec());
    }

    #[test]
    fn test_declared_mime_wins() {
        let mut file = pdf("scan.pdf");
        file.content_type = Some("application/x-pdf".into());
        assert_eq!(file.mime_type(), "application/x-pdf");
    }

    #[test]
    fn test_rejections() {
        let config = UploadConfig {
            max_size: 4,
            allowed_types: vec![".pdf".into()],
        };
        let err = embed_upload(Some(pdf("a.exe")), &config).unwrap_err();
        assert_eq!(err.message(), "File type not allowed");

        let err = embed_upload(Some(pdf("a.pdf")), &config).unwrap_err();
        assert_eq!(err.message(), "File size exceeds the limit");

        let fake = UploadedFile {
            file_name: "fake.pdf".into(),
            content_type: None,
            bytes: b"MZ".to_vec(),
        };
        let err = embed_upload(Some(fake), &UploadConfig::default()).unwrap_err();
        assert_eq!(err.code(), "E006");
    }
}
