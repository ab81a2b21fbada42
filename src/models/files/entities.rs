use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

static DATA_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:([^;,]*)((?:;[^;,]+)*),").expect("Invalid data URL regex")
});

/// 内嵌在记录中的文件（data URL + 原始文件名）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct EmbeddedFile {
    pub file_data: String,
    pub file_name: String,
}

impl EmbeddedFile {
    /// 由原始字节构造 base64 data URL
    pub fn from_bytes(file_name: impl Into<String>, mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            file_data: format!("data:{mime_type};base64,{}", STANDARD.encode(bytes)),
            file_name: file_name.into(),
        }
    }

    /// data URL 中声明的 MIME 类型
    pub fn mime_type(&self) -> Option<&str> {
        DATA_URL_RE
            .captures(&self.file_data)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|m| !m.is_empty())
    }

    /// 解码 data URL 负载（仅支持 base64）
    pub fn decode(&self) -> Option<Vec<u8>> {
        let caps = DATA_URL_RE.captures(&self.file_data)?;
        let params = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        if !params.split(';').any(|p| p == "base64") {
            return None;
        }
        let payload = &self.file_data[caps.get(0)?.end()..];
        STANDARD.decode(payload).ok()
    }
}
