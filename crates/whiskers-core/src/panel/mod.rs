//! 图片分类面板状态机
//!
//! ```text
//! Empty ──select──▶ Loaded ──predict──▶ Predicting ──finish──▶ Resolved
//!   ▲                 ▲                     │                    │
//!   │                 └──────select─────────┴──────select────────┤
//!   └─────────────────────────discard (任意状态)──────────────────┘
//! ```
//!
//! 每次选择、丢弃、预测都会递增 generation。预测结果带着发起时的
//! generation 返回，不一致即视为过期并丢弃。

pub mod theme;

pub use theme::Theme;

use crate::image::{DataUrl, ImageError};
use crate::prediction::{PredictError, failure_message};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

/// 面板当前所处状态（由字段推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Empty,
    Loaded,
    Predicting,
    Resolved { success: bool },
}

/// 一次完成的预测
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutcome {
    /// 服务返回的标签，原样展示
    Label(String),
    /// 拼接好的错误提示
    Failure(String),
}

impl PredictionOutcome {
    pub fn text(&self) -> &str {
        match self {
            PredictionOutcome::Label(s) | PredictionOutcome::Failure(s) => s,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PredictionOutcome::Failure(_))
    }
}

/// 面板操作被拒绝
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("No image selected")]
    NoImage,

    #[error("A prediction is already in progress")]
    Busy,
}

/// 已发出的预测请求
#[derive(Debug, Clone)]
pub struct PredictRequest {
    generation: u64,
    payload: String,
    cancel: CancellationToken,
}

impl PredictRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 去掉 data URL 前缀后的 base64 载荷
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

/// 上传/预测面板
#[derive(Debug, Default)]
pub struct ClassifierPanel {
    image: Option<DataUrl>,
    prediction: Option<PredictionOutcome>,
    loading: bool,
    theme: Theme,
    image_error: Option<String>,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl ClassifierPanel {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// 选择新图片，替换旧图片并清空预测结果
    pub fn select_image(&mut self, image: DataUrl) {
        self.invalidate();
        info!(
            "Image selected: {} ({} base64 chars)",
            image.mime_type(),
            image.payload_len()
        );
        self.image = Some(image);
        self.prediction = None;
        self.image_error = None;
    }

    /// 图片读取失败：保留当前图片和结果，只记录错误提示
    pub fn image_failed(&mut self, error: &ImageError) {
        log::warn!("Image selection failed: {}", error);
        self.image_error = Some(error.to_string());
    }

    /// 丢弃图片，回到 Empty
    pub fn discard_image(&mut self) {
        self.invalidate();
        self.image = None;
        self.prediction = None;
        self.image_error = None;
        debug!("Image discarded");
    }

    /// 发起预测
    ///
    /// 没有图片或已有请求在进行时拒绝，且不改变任何状态。
    pub fn begin_predict(&mut self) -> Result<PredictRequest, PanelError> {
        let image = self.image.as_ref().ok_or(PanelError::NoImage)?;
        if self.loading {
            return Err(PanelError::Busy);
        }

        let payload = image.payload().to_string();
        self.generation += 1;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        self.loading = true;
        self.prediction = None;

        Ok(PredictRequest {
            generation: self.generation,
            payload,
            cancel,
        })
    }

    /// 写回预测结果，过期结果返回 `false` 且不修改状态
    pub fn finish_predict(&mut self, generation: u64, result: Result<String, PredictError>) -> bool {
        if generation != self.generation || !self.loading {
            debug!(
                "Dropping stale prediction #{} (current #{})",
                generation, self.generation
            );
            return false;
        }

        self.prediction = Some(match result {
            Ok(label) => PredictionOutcome::Label(label),
            Err(e) => PredictionOutcome::Failure(failure_message(&e)),
        });
        self.in_flight = None;
        self.loading = false;
        true
    }

    /// 设置主题，与其它状态无关
    pub fn toggle_theme(&mut self, enabled: bool) {
        self.theme = Theme::from_dark(enabled);
    }

    pub fn state(&self) -> PanelState {
        match (&self.image, self.loading, &self.prediction) {
            (None, _, _) => PanelState::Empty,
            (Some(_), true, _) => PanelState::Predicting,
            (Some(_), false, Some(outcome)) => PanelState::Resolved {
                success: !outcome.is_failure(),
            },
            (Some(_), false, None) => PanelState::Loaded,
        }
    }

    pub fn image(&self) -> Option<&DataUrl> {
        self.image.as_ref()
    }

    /// 预测结果文本（标签或错误提示）
    pub fn prediction(&self) -> Option<&str> {
        self.prediction.as_ref().map(PredictionOutcome::text)
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.prediction.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn image_error(&self) -> Option<&str> {
        self.image_error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 取消进行中的请求并使其结果过期
    fn invalidate(&mut self) {
        if let Some(token) = self.in_flight.take() {
            debug!("Cancelling in-flight prediction #{}", self.generation);
            token.cancel();
        }
        self.generation += 1;
        self.loading = false;
    }
}
