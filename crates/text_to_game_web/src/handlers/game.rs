use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use text_to_game_core::GameError;

use crate::models::{ErrorResponse, GenerateGameRequest, GenerateGameResponse};
use crate::AppState;

pub const INVALID_MESSAGE: &str = "Invalid message";
pub const INVALID_BODY: &str = "Invalid request body";
pub const GENERATION_FAILED: &str = "Oyun oluşturulurken bir hata oluştu";

/// POST /api/generate-game - メッセージと履歴からゲームを生成
pub async fn generate_game(
    State(state): State<AppState>,
    payload: Result<Json<GenerateGameRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => {
            tracing::warn!(target: "web::game", error = %rejection, "Rejected request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_details(INVALID_BODY, rejection.body_text())),
            )
                .into_response();
        }
    };

    let Some(message) = req.valid_message() else {
        tracing::warn!(target: "web::game", "Missing or invalid message");
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_MESSAGE))).into_response();
    };

    let history = req.conversation_history.as_deref().unwrap_or_default();
    tracing::info!(target: "web::game", prompt = %message, history_len = history.len(), "Received game request");

    match state.service.generate(message, history).await {
        Ok(result) => {
            tracing::info!(target: "web::game", has_game = result.has_game(), "Game request successful");
            Json(GenerateGameResponse::from(result)).into_response()
        }
        Err(GameError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(INVALID_MESSAGE))).into_response()
        }
        Err(e) => {
            tracing::error!(target: "web::game", error = %e, "Game request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(GENERATION_FAILED, e.details())),
            )
                .into_response()
        }
    }
}
