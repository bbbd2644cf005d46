//! 预测结果

use dioxus::prelude::*;

/// 展示标签或错误提示
#[component]
pub fn ResultCard(text: String, failed: bool) -> Element {
    let class = if failed { "result failed" } else { "result" };

    rsx! {
        div { class: "{class}",
            h3 { class: "result-title", "Prediction Result:" }
            p { class: "result-text", "{text}" }
        }
    }
}
