//! 主应用组件

use dioxus::prelude::*;
use std::sync::Arc;

use crate::components::{AboutTip, Dropzone, Header, ImagePreview, PredictButton, ResultCard};
use crate::styles::GLOBAL_CSS;

use whiskers_core::{
    AppSettings, ClassifierPanel, HttpPredictionService, IMAGE_EXTENSIONS, PredictError,
    PredictionOutcome, Predictor, Theme, load_image,
};

/// 根据设置创建预测执行器，失败时保留错误文本供预测时展示
fn build_predictor(settings: &AppSettings) -> Result<Predictor, String> {
    match HttpPredictionService::new(settings) {
        Ok(service) => {
            log::info!("Prediction endpoint: {}", service.endpoint());
            Ok(Predictor::new(Arc::new(service), settings.request_timeout()))
        }
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            Err(e.to_string())
        }
    }
}

/// 主应用
#[component]
pub fn App() -> Element {
    let settings = use_hook(AppSettings::load);
    let predictor = use_hook(|| build_predictor(&settings));

    // 面板状态（图片、结果、加载标志、主题）
    let mut panel = use_signal(|| ClassifierPanel::new(Theme::from_dark(settings.dark_mode)));

    // 事件处理器
    let on_toggle_theme = move |enabled: bool| {
        panel.write().toggle_theme(enabled);
    };

    let on_pick = move |_| {
        spawn(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .set_title("选择图片")
                .add_filter("Image", IMAGE_EXTENSIONS)
                .pick_file()
                .await
            else {
                return;
            };

            match load_image(handle.path()).await {
                Ok(image) => panel.write().select_image(image),
                Err(e) => panel.write().image_failed(&e),
            }
        });
    };

    let on_discard = move |_| {
        panel.write().discard_image();
    };

    let on_predict = move |_| {
        let begun = panel.write().begin_predict();
        let request = match begun {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Predict ignored: {}", e);
                return;
            }
        };

        let predictor = predictor.clone();
        spawn(async move {
            let (generation, result) = match predictor {
                Ok(predictor) => predictor.run(request).await,
                Err(msg) => (request.generation(), Err(PredictError::Service(msg))),
            };
            panel.write().finish_predict(generation, result);
        });
    };

    // 渲染快照
    let (theme, image_src, loading, prediction, failed, image_error) = {
        let p = panel.read();
        (
            p.theme(),
            p.image().map(|image| image.as_str().to_string()),
            p.is_loading(),
            p.prediction().map(str::to_string),
            p.outcome().is_some_and(PredictionOutcome::is_failure),
            p.image_error().map(str::to_string),
        )
    };

    rsx! {
        style { "{GLOBAL_CSS}" }

        div { class: "app {theme.css_class()}",
            div { class: "container",
                div { class: "card",
                    Header { theme: theme, on_toggle: on_toggle_theme }

                    AboutTip {}

                    div { class: "stack",
                        match image_src {
                            None => rsx! {
                                Dropzone { error: image_error, on_pick: on_pick }
                            },
                            Some(src) => rsx! {
                                ImagePreview { src: src, on_discard: on_discard }
                                PredictButton { loading: loading, on_predict: on_predict }
                            },
                        }

                        if let Some(text) = prediction {
                            ResultCard { text: text, failed: failed }
                        }
                    }
                }
            }
        }
    }
}
