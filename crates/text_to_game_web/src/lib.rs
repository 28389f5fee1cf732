//! text_to_game_web
//!
//! ゲーム生成APIとプレビューページを提供するaxumサーバー。

pub mod handlers;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};
use text_to_game_core::GameService;

/// ハンドラ間で共有する状態
#[derive(Clone)]
pub struct AppState {
    pub service: GameService,
}

impl AppState {
    pub fn new(service: GameService) -> Self {
        Self { service }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // ページルート
        .route("/", get(handlers::home))
        // APIルート
        .route("/api/generate-game", post(handlers::generate_game))
        .with_state(state)
}
