use serde::{Deserialize, Serialize};
use serde_json::Value;
use text_to_game_core::{ChatTurn, GenerationResult};

/// ゲーム生成リクエスト
///
/// `message` は型チェックを自前で行うため `Value` のまま受け取る。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGameRequest {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub conversation_history: Option<Vec<ChatTurn>>,
}

impl GenerateGameRequest {
    /// 空でない文字列のメッセージだけを返す
    pub fn valid_message(&self) -> Option<&str> {
        match &self.message {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

/// ゲーム生成レスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGameResponse {
    pub message: String,
    pub game_code: String,
}

impl From<GenerationResult> for GenerateGameResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            message: result.message,
            game_code: result.game_markup,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self { error: error.into(), details: None }
    }

    pub fn with_details<S: Into<String>, D: Into<String>>(error: S, details: D) -> Self {
        Self { error: error.into(), details: Some(details.into()) }
    }
}
