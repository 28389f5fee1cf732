use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use text_to_game_core::{ChatModel, ChatTurn, GameService};
use text_to_game_web::{router, AppState};
use tower::ServiceExt;

// Load .env before tests in this integration test binary
#[ctor::ctor]
fn _load_dotenv() { let _ = dotenvy::dotenv(); }

const PONG_REPLY: &str = "AÇIKLAMA: İki oyunculu Pong.\n\nKOD:\n```html\n<!DOCTYPE html>\n<canvas></canvas><script>loop()</script>\n```";

/// Counts upstream calls and answers with a fixed result.
struct CountingModel {
    reply: Option<&'static str>,
    calls: AtomicUsize,
    last_turns: std::sync::Mutex<Vec<ChatTurn>>,
}

impl CountingModel {
    fn replying(reply: &'static str) -> Arc<Self> {
        Arc::new(Self { reply: Some(reply), calls: AtomicUsize::new(0), last_turns: Default::default() })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self { reply: None, calls: AtomicUsize::new(0), last_turns: Default::default() })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ChatModel for CountingModel {
    fn model_id(&self) -> &str {
        "counting"
    }

    async fn complete(&self, _system: &str, turns: &[ChatTurn]) -> color_eyre::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_turns.lock().unwrap() = turns.to_vec();
        self.reply
            .map(str::to_string)
            .ok_or_else(|| color_eyre::eyre::eyre!("upstream unavailable"))
    }
}

fn app(model: &Arc<CountingModel>) -> axum::Router {
    router(AppState::new(GameService::new(model.clone(), 20)))
}

async fn post_json(app: axum::Router, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/generate-game")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn generates_game_with_one_upstream_call() {
    let model = CountingModel::replying(PONG_REPLY);
    let (status, body) = post_json(app(&model), json!({ "message": "Pong yap" }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(model.calls(), 1);
    assert_eq!(body["message"], "AÇIKLAMA: İki oyunculu Pong.");
    let code = body["gameCode"].as_str().unwrap();
    assert!(code.contains("<script>"));
}

#[tokio::test]
async fn history_is_forwarded_before_new_message() {
    let model = CountingModel::replying(PONG_REPLY);
    let body = json!({
        "message": "Renkleri değiştir",
        "conversationHistory": [
            { "role": "user", "content": "Pong yap" },
            { "role": "assistant", "content": "AÇIKLAMA: Pong" }
        ]
    });
    let (status, _) = post_json(app(&model), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let turns = model.last_turns.lock().unwrap().clone();
    assert_eq!(turns, vec![
        ChatTurn::user("Pong yap"),
        ChatTurn::assistant("AÇIKLAMA: Pong"),
        ChatTurn::user("Renkleri değiştir"),
    ]);
}

#[tokio::test]
async fn reply_without_code_returns_empty_game_code() {
    let model = CountingModel::replying("Ne tür bir oyun istersin?");
    let (status, body) = post_json(app(&model), json!({ "message": "Oyun" }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Ne tür bir oyun istersin?");
    assert_eq!(body["gameCode"], "");
}

#[tokio::test]
async fn invalid_messages_are_rejected_without_upstream_call() {
    let model = CountingModel::replying(PONG_REPLY);
    for payload in [json!({}), json!({ "message": "" }), json!({ "message": 7 }), json!({ "message": null })] {
        let (status, body) = post_json(app(&model), payload.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body, json!({ "error": "Invalid message" }));
    }
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let model = CountingModel::replying(PONG_REPLY);

    let (status, body) = post_json(app(&model), "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    let bad_role = json!({ "message": "x", "conversationHistory": [{ "role": "system", "content": "y" }] });
    let (status, _) = post_json(app(&model), bad_role.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn upstream_failure_is_internal_error_with_details() {
    let model = CountingModel::failing();
    let (status, body) = post_json(app(&model), json!({ "message": "Tetris" }).to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(model.calls(), 1);
    assert_eq!(body["error"], "Oyun oluşturulurken bir hata oluştu");
    assert!(body["details"].as_str().unwrap().contains("upstream unavailable"));
}

#[tokio::test]
async fn home_page_has_sandboxed_preview() {
    let model = CountingModel::replying(PONG_REPLY);
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app(&model).oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"sandbox="allow-scripts""#));
    assert!(html.contains("/api/generate-game"));
    assert!(html.contains("Üzgünüm, bir hata oluştu."));
    assert_eq!(model.calls(), 0);
}
