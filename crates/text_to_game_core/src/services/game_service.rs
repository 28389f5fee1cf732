//! GameService
//!
//! 会話中継のビジネスロジック層。
//! 入力検証 → 履歴の制限 → モデル呼び出し（1回）→ ゲームコード抽出。

use crate::config::GameConfig;
use crate::error::GameError;
use crate::extract::extract_game;
use crate::model::ChatModel;
use crate::openai::history::bound_turns;
use crate::openai::{OpenAiChatModel, SYSTEM_PROMPT};
use crate::types::{ChatTurn, GenerationResult};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Message shown when the model returned a game but no description.
pub const FALLBACK_MESSAGE: &str = "Oyun oluşturuldu! Sağ tarafta görüntüleyebilirsiniz.";

/// ゲーム生成サービス
#[derive(Clone)]
pub struct GameService {
    model: Arc<dyn ChatModel>,
    history_limit: usize,
}

impl GameService {
    /// 任意のモデル実装でサービスを作成
    pub fn new(model: Arc<dyn ChatModel>, history_limit: usize) -> Self {
        Self { model, history_limit }
    }

    /// 設定からOpenAI互換クライアントを構築してサービスを作成
    pub fn from_config(config: GameConfig) -> color_eyre::Result<Self> {
        let history_limit = config.history_limit;
        let model = OpenAiChatModel::new(config)?;
        Ok(Self::new(Arc::new(model), history_limit))
    }

    pub fn model_id(&self) -> &str {
        self.model.model_id()
    }

    /// Relay `message` plus `history` to the model and return its raw reply.
    ///
    /// # Arguments
    /// * `message` - ユーザーの新しいメッセージ（空は不可）
    /// * `history` - これまでの会話（古い順）
    ///
    /// # Returns
    /// モデルの応答テキスト（未加工）
    #[instrument(name = "relay", skip(self, message, history), fields(history_len = history.len()))]
    pub async fn relay(&self, message: &str, history: &[ChatTurn]) -> Result<String, GameError> {
        if message.trim().is_empty() {
            return Err(GameError::InvalidInput("message must not be empty".to_string()));
        }

        let mut turns = bound_turns(history, self.history_limit).to_vec();
        if turns.len() < history.len() {
            info!(target: "game_service", kept = turns.len(), dropped = history.len() - turns.len(), "history truncated");
        }
        turns.push(ChatTurn::user(message));

        self.model.complete(SYSTEM_PROMPT, &turns).await.map_err(|e| {
            error!(target: "game_service", error = %e, "Error generating game");
            GameError::GenerationFailed { details: e.to_string() }
        })
    }

    /// 中継してからゲームコードを抽出する
    ///
    /// The returned `message` is never empty.
    #[instrument(name = "generate", skip(self, message, history))]
    pub async fn generate(&self, message: &str, history: &[ChatTurn]) -> Result<GenerationResult, GameError> {
        let reply = self.relay(message, history).await?;
        let mut result = extract_game(&reply);
        if result.message.trim().is_empty() {
            result.message = FALLBACK_MESSAGE.to_string();
        }

        info!(
            target: "game_service",
            has_game = result.has_game(),
            markup_len = result.game_markup.len(),
            "game generated"
        );
        Ok(result)
    }
}
