//! Whiskers GUI Application
//!
//! 基于 Dioxus 的桌面 GUI：上传图片，调用分类服务判断是猫还是狗。
//!
//! # 架构
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Dioxus Desktop App                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐   │
//! │  │    Header    │  │  Dropzone /  │  │   ResultCard     │   │
//! │  │ (主题切换)    │  │  Preview     │  │   (预测结果)      │   │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  ClassifierPanel 状态机                      │
//! │                   (whiskers-core crate)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod components;
mod styles;

fn main() {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Whiskers GUI...");

    // 启动 Dioxus 桌面应用
    dioxus::launch(app::App);
}
