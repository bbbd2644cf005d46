//! 预测调用包装
//!
//! 为单次服务调用加上超时和取消，并带回请求代号，
//! 由面板判断结果是否已经过期。

use super::{PredictError, PredictionService};
use crate::panel::PredictRequest;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

/// 带超时与取消的预测执行器
#[derive(Clone)]
pub struct Predictor {
    service: Arc<dyn PredictionService>,
    timeout: Duration,
}

impl Predictor {
    pub fn new(service: Arc<dyn PredictionService>, timeout: Duration) -> Self {
        Self { service, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 执行一次预测，返回 `(generation, result)`
    pub async fn run(&self, request: PredictRequest) -> (u64, Result<String, PredictError>) {
        let generation = request.generation();
        let cancel = request.cancel_token().clone();

        debug!(
            "Prediction #{} started ({} base64 chars)",
            generation,
            request.payload().len()
        );

        let result = tokio::select! {
            () = cancel.cancelled() => Err(PredictError::Cancelled),
            res = tokio::time::timeout(self.timeout, self.service.predict(request.payload())) => {
                res.unwrap_or(Err(PredictError::Timeout(self.timeout)))
            }
        };

        match &result {
            Ok(label) => debug!("Prediction #{} finished: {}", generation, label),
            Err(PredictError::Cancelled) => debug!("Prediction #{} cancelled", generation),
            Err(e) => warn!("Prediction #{} failed: {}", generation, e),
        }

        (generation, result)
    }
}
