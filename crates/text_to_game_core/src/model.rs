//! ホストされたチャットモデルへの抽象

use crate::types::ChatTurn;
use async_trait::async_trait;
use color_eyre::Result;

/// A hosted chat-completion model.
///
/// One call to [`ChatModel::complete`] is one upstream request. `turns`
/// already ends with the new user message; the system instruction is passed
/// separately so providers can place it where their API expects it.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// 識別用のモデル名（ログ用）
    fn model_id(&self) -> &str;

    /// Send the conversation and return the model's text reply.
    async fn complete(&self, system: &str, turns: &[ChatTurn]) -> Result<String>;
}
