//! 集成测试 - 面板 + 预测服务
//!
//! 使用内存中的假服务驱动完整的选择/预测流程，
//! 并用本地 axum 服务器模拟 Whiskers 后端验证 HTTP 客户端。

use axum::{
    Router,
    extract::Multipart,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use base64::Engine;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use whiskers_core::{
    AppSettings, ClassifierPanel, DataUrl, HttpPredictionService, PanelState, PredictError,
    PredictionService, Predictor, Theme,
};

/// 可配置延迟和返回值的假服务
struct FakeService {
    reply: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
    last_payload: std::sync::Mutex<Option<String>>,
}

impl FakeService {
    fn ok(label: &str) -> Arc<Self> {
        Self::with(Ok(label.to_string()), Duration::ZERO)
    }

    fn with(reply: Result<String, String>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
            last_payload: std::sync::Mutex::new(None),
        })
    }
}

#[async_trait::async_trait]
impl PredictionService for FakeService {
    async fn predict(&self, image_base64: &str) -> Result<String, PredictError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(image_base64.to_string());
        tokio::time::sleep(self.delay).await;
        self.reply.clone().map_err(PredictError::Service)
    }
}

fn fake_jpeg(size: usize) -> DataUrl {
    let mut bytes = vec![0xff, 0xd8, 0xff, 0xe0];
    bytes.extend((0..size).map(|i| (i % 251) as u8));
    DataUrl::encode("image/jpeg", &bytes)
}

/// 选择 10KB JPEG 并预测成功
#[tokio::test]
async fn test_select_and_predict_cat() {
    let service = FakeService::ok("cat");
    let predictor = Predictor::new(service.clone(), Duration::from_secs(5));
    let mut panel = ClassifierPanel::new(Theme::Light);

    let image = fake_jpeg(10 * 1024);
    panel.select_image(image.clone());
    assert_eq!(panel.state(), PanelState::Loaded);
    assert!(panel.prediction().is_none());

    let request = panel.begin_predict().unwrap();
    assert!(panel.is_loading());

    let (generation, result) = predictor.run(request).await;
    assert!(panel.finish_predict(generation, result));

    assert_eq!(panel.prediction(), Some("cat"));
    assert!(!panel.is_loading());
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);

    // 服务收到的是去掉前缀后的载荷
    let sent = service.last_payload.lock().unwrap().clone().unwrap();
    assert_eq!(sent, image.payload());
}

/// 服务拒绝时展示拼接后的错误信息
#[tokio::test]
async fn test_service_rejection_message() {
    let service = FakeService::with(Err("timeout".to_string()), Duration::ZERO);
    let predictor = Predictor::new(service, Duration::from_secs(5));
    let mut panel = ClassifierPanel::default();

    panel.select_image(fake_jpeg(16));
    let (generation, result) = predictor.run(panel.begin_predict().unwrap()).await;
    panel.finish_predict(generation, result);

    assert_eq!(
        panel.prediction(),
        Some("An error occurred during prediction.timeout")
    );
    assert!(!panel.is_loading());
}

/// 服务挂起时由超时收尾，不会一直处于加载状态
#[tokio::test]
async fn test_hung_service_times_out() {
    let service = FakeService::with(Ok("late".to_string()), Duration::from_secs(30));
    let predictor = Predictor::new(service, Duration::from_millis(50));
    let mut panel = ClassifierPanel::default();

    panel.select_image(fake_jpeg(16));
    let (generation, result) = predictor.run(panel.begin_predict().unwrap()).await;
    assert!(matches!(result, Err(PredictError::Timeout(_))));

    panel.finish_predict(generation, result);
    assert!(!panel.is_loading());
    assert!(
        panel
            .prediction()
            .unwrap()
            .starts_with("An error occurred during prediction.Request timed out")
    );
}

/// 请求进行中丢弃图片：请求被取消，迟到的结果被忽略
#[tokio::test]
async fn test_discard_cancels_pending_request() {
    let service = FakeService::with(Ok("cat".to_string()), Duration::from_secs(30));
    let predictor = Predictor::new(service, Duration::from_secs(60));
    let mut panel = ClassifierPanel::default();

    panel.select_image(fake_jpeg(16));
    let request = panel.begin_predict().unwrap();
    let pending = tokio::spawn({
        let predictor = predictor.clone();
        async move { predictor.run(request).await }
    });

    panel.discard_image();
    assert!(panel.image().is_none());

    let (generation, result) = tokio::time::timeout(Duration::from_secs(5), pending)
        .await
        .expect("cancelled request should finish promptly")
        .unwrap();
    assert!(matches!(result, Err(PredictError::Cancelled)));

    assert!(!panel.finish_predict(generation, result));
    assert!(panel.prediction().is_none());
    assert_eq!(panel.state(), PanelState::Empty);
}

// ============================================================================
// HTTP 客户端测试
// ============================================================================

/// 模拟后端：要求 multipart 中包含 name=image 与 file 字段
async fn upload_handler(mut multipart: Multipart) -> impl IntoResponse {
    let mut name_field = None;
    let mut file = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("name") => name_field = field.text().await.ok(),
            Some("file") => {
                let file_name = field.file_name().map(ToString::to_string);
                let mime = field.content_type().map(ToString::to_string);
                let bytes = field.bytes().await.unwrap_or_default();
                file = Some((file_name, mime, bytes));
            }
            _ => {}
        }
    }

    match (name_field.as_deref(), file) {
        (Some("image"), Some((Some(file_name), Some(mime), bytes)))
            if file_name == "image.png" && mime == "image/png" =>
        {
            let result = if bytes.starts_with(b"CAT") { "cat" } else { "dog" };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                format!(r#"{{"result":"{result}","confidence":"99%"}}"#),
            )
                .into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"No file part"}"#.to_string(),
        )
            .into_response(),
    }
}

async fn plain_error_handler() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "backend asleep")
}

/// 永不及时响应的后端
async fn hanging_handler() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(60)).await;
    "too late"
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/upload", post(upload_handler))
        .route("/broken", post(plain_error_handler))
        .route("/hang", post(hanging_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn settings_for(endpoint: String) -> AppSettings {
    AppSettings {
        endpoint,
        request_timeout_secs: 5,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_http_service_json_success() {
    let base = spawn_backend().await;
    let service = HttpPredictionService::new(&settings_for(format!("{base}/upload"))).unwrap();

    let payload = base64::engine::general_purpose::STANDARD.encode(b"CAT-PIXELS");
    let label = service.predict(&payload).await.unwrap();
    assert_eq!(label, "Result: cat, Confidence: 99%");
}

#[tokio::test]
async fn test_http_service_plain_error() {
    let base = spawn_backend().await;
    let service = HttpPredictionService::new(&settings_for(format!("{base}/broken"))).unwrap();

    let payload = base64::engine::general_purpose::STANDARD.encode(b"DOG");
    let err = service.predict(&payload).await.unwrap_err();
    assert_eq!(err.to_string(), "backend asleep");
}

#[tokio::test]
async fn test_http_service_rejects_bad_base64() {
    let service = HttpPredictionService::new(&settings_for(
        "http://127.0.0.1:9/upload".to_string(),
    ))
    .unwrap();

    let err = service.predict("not base64!").await.unwrap_err();
    assert!(matches!(err, PredictError::InvalidPayload(_)));
}

/// 完整流程：面板 + HTTP 客户端 + 本地后端
#[tokio::test]
async fn test_panel_against_http_backend() {
    let base = spawn_backend().await;
    let service = HttpPredictionService::new(&settings_for(format!("{base}/upload"))).unwrap();
    let predictor = Predictor::new(Arc::new(service), Duration::from_secs(5));

    let mut panel = ClassifierPanel::new(Theme::Dark);
    panel.select_image(DataUrl::encode("image/jpeg", b"DOG-PIXELS"));

    let (generation, result) = predictor.run(panel.begin_predict().unwrap()).await;
    assert!(panel.finish_predict(generation, result));
    assert_eq!(panel.prediction(), Some("Result: dog, Confidence: 99%"));
    assert_eq!(panel.theme(), Theme::Dark);
}

/// 后端挂起时客户端自身的超时也报告为 Timeout
#[tokio::test]
async fn test_http_service_hanging_backend_times_out() {
    let base = spawn_backend().await;
    let settings = AppSettings {
        endpoint: format!("{base}/hang"),
        request_timeout_secs: 1,
        ..Default::default()
    };
    let service = HttpPredictionService::new(&settings).unwrap();

    let payload = base64::engine::general_purpose::STANDARD.encode(b"CAT");
    let err = service.predict(&payload).await.unwrap_err();
    assert!(matches!(err, PredictError::Timeout(d) if d == Duration::from_secs(1)));
}

/// 两层超时同一期限，无论哪一层先触发，面板都得到超时消息
#[tokio::test]
async fn test_panel_hanging_backend_reports_timeout() {
    let base = spawn_backend().await;
    let settings = AppSettings {
        endpoint: format!("{base}/hang"),
        request_timeout_secs: 1,
        ..Default::default()
    };
    let service = HttpPredictionService::new(&settings).unwrap();
    let predictor = Predictor::new(Arc::new(service), settings.request_timeout());

    for _ in 0..3 {
        let mut panel = ClassifierPanel::default();
        panel.select_image(fake_jpeg(16));

        let (generation, result) = predictor.run(panel.begin_predict().unwrap()).await;
        assert!(matches!(result, Err(PredictError::Timeout(_))));

        panel.finish_predict(generation, result);
        assert!(!panel.is_loading());
        assert_eq!(
            panel.prediction(),
            Some("An error occurred during prediction.Request timed out after 1s")
        );
    }
}
