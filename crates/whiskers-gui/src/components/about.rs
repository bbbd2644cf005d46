//! 应用说明

use dioxus::prelude::*;

const ABOUT_TEXT: &str = "Whiskers is an AI-powered app that predicts whether an uploaded \
image is a cat or a dog. It's a binary classifier trained to differentiate between feline \
and canine friends!";

/// 悬停显示说明的信息按钮
#[component]
pub fn AboutTip() -> Element {
    rsx! {
        div { class: "tooltip",
            button { class: "btn btn-outline btn-icon", "ℹ️" }
            div { class: "tooltip-content",
                p { "{ABOUT_TEXT}" }
            }
        }
    }
}
