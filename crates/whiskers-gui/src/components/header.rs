//! 头部组件

use dioxus::prelude::*;
use whiskers_core::Theme;

/// 标题与明暗主题开关
#[component]
pub fn Header(theme: Theme, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "logo", "Whiskers" }

            label { class: "theme-switch",
                span { class: "theme-icon sun", "☀️" }
                input {
                    r#type: "checkbox",
                    checked: theme.is_dark(),
                    onchange: move |evt: FormEvent| on_toggle.call(evt.checked()),
                }
                span { class: "switch-track" }
                span { class: "theme-icon moon", "🌙" }
            }
        }
    }
}
