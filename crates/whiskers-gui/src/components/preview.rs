//! 图片预览与预测按钮

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ImagePreviewProps {
    /// data URL，可直接作为 img src
    pub src: String,
    pub on_discard: EventHandler<()>,
}

/// 已选择的图片，右上角为丢弃按钮
#[component]
pub fn ImagePreview(props: ImagePreviewProps) -> Element {
    rsx! {
        div { class: "preview",
            img { class: "preview-image", src: "{props.src}", alt: "Uploaded" }
            button {
                class: "btn btn-danger btn-icon preview-discard",
                onclick: move |_| props.on_discard.call(()),
                "✕"
            }
        }
    }
}

/// 预测按钮，请求进行中禁用
#[component]
pub fn PredictButton(loading: bool, on_predict: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn btn-primary btn-block",
            disabled: loading,
            onclick: move |_| on_predict.call(()),
            if loading {
                span { class: "spinner" }
                "Predicting..."
            } else {
                "🪄 Predict"
            }
        }
    }
}
