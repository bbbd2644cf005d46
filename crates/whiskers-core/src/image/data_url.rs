//! Self-describing image string
//!
//! 格式: `data:<mime>;base64,<payload>`
//!
//! 发送给预测服务前需要去掉第一个逗号及其之前的所有内容。

use super::ImageError;
use base64::{Engine as _, engine::general_purpose};
use std::fmt;

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// 带 MIME 类型的 base64 图片字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    raw: String,
}

impl DataUrl {
    /// 将原始字节编码为 data URL
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let payload = general_purpose::STANDARD.encode(bytes);
        Self {
            raw: format!("{DATA_PREFIX}{mime}{BASE64_MARKER},{payload}"),
        }
    }

    /// 解析已有的 data URL 字符串
    pub fn parse(text: &str) -> Result<Self, ImageError> {
        if text.starts_with(DATA_PREFIX) && text.contains(',') {
            Ok(Self {
                raw: text.to_string(),
            })
        } else {
            Err(ImageError::InvalidDataUrl(truncate(text, 32)))
        }
    }

    /// 第一个逗号之后的 base64 载荷
    pub fn payload(&self) -> &str {
        self.raw
            .split_once(',')
            .map_or("", |(_, payload)| payload)
    }

    /// MIME 类型（不含 `;base64` 等参数）
    pub fn mime_type(&self) -> &str {
        let header = self
            .raw
            .split_once(',')
            .map_or(self.raw.as_str(), |(header, _)| header);
        let header = header.strip_prefix(DATA_PREFIX).unwrap_or(header);
        header.split(';').next().unwrap_or_default()
    }

    /// 完整字符串，可直接用作 `<img src>`
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// base64 载荷的长度（用于日志）
    pub fn payload_len(&self) -> usize {
        self.payload().len()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
