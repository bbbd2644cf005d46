//! 图片读取
//!
//! 不校验文件内容是否真的是图片，只依据扩展名猜测 MIME 类型。

use super::{DataUrl, ImageError};
use log::debug;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// 异步读取文件并编码为 data URL
pub async fn load_image(path: impl AsRef<Path>) -> Result<DataUrl, ImageError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
    encode_file(&name, &bytes)
}

/// 将已读入内存的文件编码为 data URL
pub fn encode_file(file_name: &str, bytes: &[u8]) -> Result<DataUrl, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty(file_name.to_string()));
    }

    let mime = mime_guess::from_path(file_name)
        .first()
        .map_or_else(|| FALLBACK_MIME.to_string(), |m| m.to_string());

    debug!(
        "Encoded {} ({} bytes) as {}",
        file_name,
        bytes.len(),
        mime
    );

    Ok(DataUrl::encode(&mime, bytes))
}
