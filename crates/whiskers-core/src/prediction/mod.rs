//! 预测服务模块
//!
//! 包含:
//! - 预测服务抽象 (`PredictionService`)
//! - Whiskers 后端的 HTTP 客户端
//! - 带超时/取消的调用包装 (`Predictor`)

pub mod http_client;
pub mod protocol;
pub mod runner;

pub use http_client::HttpPredictionService;
pub use protocol::{ErrorResponse, PredictionResponse};
pub use runner::Predictor;

use std::time::Duration;

/// 预测失败时展示给用户的消息前缀，错误文本直接拼接在后面
pub const PREDICTION_ERROR_PREFIX: &str = "An error occurred during prediction.";

/// 预测服务
///
/// 输入为去掉 data URL 前缀后的 base64 载荷，返回原样展示的标签文本。
#[async_trait::async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, image_base64: &str) -> Result<String, PredictError>;
}

/// 预测错误
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// 后端返回的错误文本
    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid image payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),

    #[error("Malformed response: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,
}

/// 生成失败时展示的消息（无分隔符拼接）
pub fn failure_message(error: &PredictError) -> String {
    format!("{PREDICTION_ERROR_PREFIX}{error}")
}
