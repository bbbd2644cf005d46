//! Whiskers 后端 HTTP 客户端
//!
//! 以 multipart 表单上传图片:
//! - `name`: 固定文本 `image`
//! - `file`: 解码后的图片字节

use super::protocol::interpret_response;
use super::{PredictError, PredictionService};
use crate::config::AppSettings;
use base64::{Engine as _, engine::general_purpose};
use log::{debug, info};
use reqwest::multipart;
use std::time::Duration;

/// 通过 HTTP 调用远程分类服务
pub struct HttpPredictionService {
    client: reqwest::Client,
    endpoint: String,
    file_name: String,
    mime: String,
    timeout: Duration,
}

impl HttpPredictionService {
    pub fn new(settings: &AppSettings) -> Result<Self, PredictError> {
        let timeout = settings.request_timeout();
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            file_name: settings.upload_file_name.clone(),
            mime: settings.upload_mime.clone(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(&self, bytes: Vec<u8>) -> Result<multipart::Form, PredictError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(self.file_name.clone())
            .mime_str(&self.mime)?;

        Ok(multipart::Form::new().text("name", "image").part("file", part))
    }

    /// 客户端自身的超时与外层超时同一期限，统一报告为 `Timeout`
    fn transport_error(&self, e: reqwest::Error) -> PredictError {
        if e.is_timeout() {
            PredictError::Timeout(self.timeout)
        } else {
            PredictError::Http(e)
        }
    }
}

#[async_trait::async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(&self, image_base64: &str) -> Result<String, PredictError> {
        let bytes = general_purpose::STANDARD.decode(image_base64)?;
        info!("Uploading {} bytes to {}", bytes.len(), self.endpoint);

        let form = self.build_form(bytes)?;
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!(
            "Prediction response: status={}, content_type={}, body_len={}",
            status,
            content_type,
            body.len()
        );

        interpret_response(status.is_success(), &content_type, &body)
    }
}
