//! UI 组件模块

mod about;
mod dropzone;
mod header;
mod preview;
mod result_card;

pub use about::AboutTip;
pub use dropzone::Dropzone;
pub use header::Header;
pub use preview::{ImagePreview, PredictButton};
pub use result_card::ResultCard;
