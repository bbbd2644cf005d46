//! Whiskers 后端响应格式
//!
//! - 成功 + JSON: `{"result": "...", "confidence": ...}`
//! - 失败 + JSON: `{"error": "..."}`
//! - 非 JSON 响应体按纯文本处理

use super::PredictError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub result: String,
    /// 后端可能返回字符串或数字
    pub confidence: Value,
}

impl PredictionResponse {
    /// 展示用的文本
    pub fn label(&self) -> String {
        let confidence = match &self.confidence {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        format!("Result: {}, Confidence: {}", self.result, confidence)
    }
}

/// 失败响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 根据状态码和 Content-Type 解释响应体
pub fn interpret_response(
    success: bool,
    content_type: &str,
    body: &str,
) -> Result<String, PredictError> {
    let is_json = content_type.contains("application/json");

    match (success, is_json) {
        (true, true) => {
            let prediction: PredictionResponse = serde_json::from_str(body)?;
            Ok(prediction.label())
        }
        (true, false) => Ok(body.to_string()),
        (false, true) => {
            let error: ErrorResponse = serde_json::from_str(body)?;
            Err(PredictError::Service(error.error))
        }
        (false, false) => Err(PredictError::Service(body.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_success() {
        let label = interpret_response(
            true,
            "application/json",
            r#"{"result":"cat","confidence":"97.5%"}"#,
        )
        .unwrap();
        assert_eq!(label, "Result: cat, Confidence: 97.5%");
    }

    #[test]
    fn test_json_success_numeric_confidence() {
        let label = interpret_response(
            true,
            "application/json; charset=utf-8",
            r#"{"result":"dog","confidence":0.91}"#,
        )
        .unwrap();
        assert_eq!(label, "Result: dog, Confidence: 0.91");
    }

    #[test]
    fn test_plain_success_verbatim() {
        let label = interpret_response(true, "text/plain", "cat").unwrap();
        assert_eq!(label, "cat");
    }

    #[test]
    fn test_json_error() {
        let err = interpret_response(false, "application/json", r#"{"error":"no file"}"#)
            .unwrap_err();
        assert!(matches!(&err, PredictError::Service(msg) if msg == "no file"));
    }

    #[test]
    fn test_plain_error() {
        let err = interpret_response(false, "text/html", "Bad Gateway").unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn test_malformed_json() {
        let err = interpret_response(true, "application/json", "{not json").unwrap_err();
        assert!(matches!(err, PredictError::Protocol(_)));
    }
}
