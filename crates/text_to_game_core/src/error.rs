//! ゲーム生成の失敗種別

use thiserror::Error;

/// Errors surfaced to callers of [`crate::GameService`].
///
/// Both kinds are terminal for the request: no retries, no partial results.
#[derive(Debug, Error)]
pub enum GameError {
    /// 呼び出し側の入力不正（上流へのリクエストは行われない）
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// モデル呼び出しまたは応答処理の失敗
    #[error("generation failed: {details}")]
    GenerationFailed { details: String },
}

impl GameError {
    /// 診断用の詳細メッセージ
    pub fn details(&self) -> &str {
        match self {
            GameError::InvalidInput(msg) => msg,
            GameError::GenerationFailed { details } => details,
        }
    }
}
