//! 单次分类流程：选择图片 → 预测 → 返回结果

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use whiskers_core::{
    AppSettings, ClassifierPanel, HttpPredictionService, PredictionOutcome, Predictor, Theme,
    load_image,
};

pub async fn run(settings: &AppSettings, file: &Path) -> Result<PredictionOutcome> {
    let service = HttpPredictionService::new(settings).context("无法创建 HTTP 客户端")?;
    let endpoint = service.endpoint().to_string();
    let predictor = Predictor::new(Arc::new(service), settings.request_timeout());
    tracing::info!(
        "Using endpoint {} (timeout {}s)",
        endpoint,
        predictor.timeout().as_secs()
    );

    let mut panel = ClassifierPanel::new(Theme::from_dark(settings.dark_mode));

    match load_image(file).await {
        Ok(image) => panel.select_image(image),
        Err(e) => {
            panel.image_failed(&e);
            return Err(e.into());
        }
    }

    let request = panel.begin_predict()?;
    eprintln!("⏳ Predicting...");
    let (generation, result) = predictor.run(request).await;
    panel.finish_predict(generation, result);

    panel
        .outcome()
        .cloned()
        .context("prediction finished without a result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        http::{StatusCode, header},
        response::IntoResponse,
        routing::post,
    };
    use std::path::PathBuf;

    async fn rejecting_handler() -> impl IntoResponse {
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"Unsupported image"}"#,
        )
    }

    async fn accepting_handler() -> impl IntoResponse {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"result":"cat","confidence":0.98}"#,
        )
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/reject", post(rejecting_handler))
            .route("/upload", post(accepting_handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn temp_image(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "whiskers-cli-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0d, 0x0a]).unwrap();
        path
    }

    fn settings_for(endpoint: String) -> AppSettings {
        AppSettings {
            endpoint,
            request_timeout_secs: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let settings = settings_for("http://127.0.0.1:9/upload".to_string());
        let path = std::env::temp_dir().join("whiskers-cli-does-not-exist.png");

        assert!(run(&settings, &path).await.is_err());
    }

    #[tokio::test]
    async fn test_backend_rejection_is_failure() {
        let base = spawn_backend().await;
        let path = temp_image("reject.png");

        let outcome = run(&settings_for(format!("{base}/reject")), &path)
            .await
            .unwrap();
        assert!(outcome.is_failure());
        assert_eq!(
            outcome.text(),
            "An error occurred during prediction.Unsupported image"
        );

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_backend_label() {
        let base = spawn_backend().await;
        let path = temp_image("accept.png");

        let outcome = run(&settings_for(format!("{base}/upload")), &path)
            .await
            .unwrap();
        assert!(!outcome.is_failure());
        assert_eq!(outcome.text(), "Result: cat, Confidence: 0.98");

        std::fs::remove_file(&path).ok();
    }
}
