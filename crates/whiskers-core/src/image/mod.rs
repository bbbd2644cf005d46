//! 图片模块
//!
//! 包含:
//! - data URL 编码 (`data:<mime>;base64,<payload>`)
//! - 从文件读取图片并编码

pub mod data_url;
pub mod loader;

pub use data_url::DataUrl;
pub use loader::{encode_file, load_image};

use std::path::PathBuf;

/// 文件选择器的过滤提示，不做强制校验
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// 图片读取/编码错误
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is empty: {0}")]
    Empty(String),

    #[error("Not a data URL: {0}")]
    InvalidDataUrl(String),
}
