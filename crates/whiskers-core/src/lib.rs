//! Whiskers Core Library
//!
//! 猫狗图片分类应用的核心实现：面板状态机、图片编码以及预测服务客户端。
//!
//! # 模块
//!
//! - **image**: 图片读取与 data URL 编码
//! - **prediction**: 预测服务抽象、HTTP 客户端、超时/取消包装
//! - **panel**: 上传/预测交互状态机
//! - **config**: 应用设置与持久化
//!
//! # 使用示例
//!
//! ```ignore
//! use whiskers_core::{AppSettings, ClassifierPanel, HttpPredictionService, Predictor, load_image};
//!
//! let settings = AppSettings::load();
//! let service = HttpPredictionService::new(&settings)?;
//! let predictor = Predictor::new(Arc::new(service), settings.request_timeout());
//!
//! let mut panel = ClassifierPanel::new(Theme::Light);
//!
//! // 1. 选择图片
//! panel.select_image(load_image("cat.jpg").await?);
//!
//! // 2. 发起预测
//! let request = panel.begin_predict()?;
//! let (generation, result) = predictor.run(request).await;
//! panel.finish_predict(generation, result);
//!
//! println!("{}", panel.prediction().unwrap_or_default());
//! ```

pub mod config;
pub mod image;
pub mod panel;
pub mod prediction;

pub use config::AppSettings;

// Image re-exports
pub use image::{DataUrl, IMAGE_EXTENSIONS, ImageError, encode_file, load_image};

// Panel re-exports
pub use panel::{ClassifierPanel, PanelError, PanelState, PredictRequest, PredictionOutcome, Theme};

// Prediction re-exports
pub use prediction::{
    HttpPredictionService, PREDICTION_ERROR_PREFIX, PredictError, PredictionService, Predictor,
};
