//! 图片上传区域

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    /// 上一次选择失败的原因
    pub error: Option<String>,
    pub on_pick: EventHandler<()>,
}

/// 点击打开文件选择器
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    rsx! {
        div {
            class: "dropzone",
            onclick: move |_| props.on_pick.call(()),

            div { class: "dropzone-icon", "📤" }
            p { class: "dropzone-text",
                span { class: "strong", "Click to upload" }
                " an image"
            }
            p { class: "dropzone-hint", "PNG, JPG or GIF (MAX. 800x400px)" }

            if let Some(err) = props.error.as_ref() {
                p { class: "dropzone-error", "❌ {err}" }
            }
        }
    }
}
