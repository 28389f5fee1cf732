use crate::config::GameConfig;
use crate::openai::ConversationHistory;
use async_openai::types::{CreateChatCompletionRequest, CreateChatCompletionRequestArgs};
use color_eyre::Result;
use tracing::debug;

/// トークン制限戦略を表現する列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenLimitStrategy {
    /// `max_tokens` を使用（4oモデル向け）
    MaxTokens,
    /// `max_completion_tokens` を使用（5系モデル向け）
    MaxCompletionTokens,
}

/// モデル名からトークン制限戦略を判定する
pub(crate) fn determine_token_limit_strategy(model: &str) -> TokenLimitStrategy {
    if model.contains("4o") {
        debug!(model = %model, strategy = "MaxTokens", "モデルは4oファミリー");
        TokenLimitStrategy::MaxTokens
    } else {
        debug!(model = %model, strategy = "MaxCompletionTokens", "モデルは5系ファミリー");
        TokenLimitStrategy::MaxCompletionTokens
    }
}

/// 会話履歴と設定からChatCompletionリクエストを構築する
///
/// # Arguments
/// * `history` - システムメッセージ付きの会話履歴
/// * `config` - ゲーム生成設定
#[allow(deprecated)]
pub fn build_chat_request(
    history: &ConversationHistory,
    config: &GameConfig,
) -> Result<CreateChatCompletionRequest> {
    let mut builder = CreateChatCompletionRequestArgs::default();
    builder
        .model(&config.model)
        .messages(history.as_slice_with_system());

    let req = match determine_token_limit_strategy(&config.model) {
        TokenLimitStrategy::MaxTokens => {
            debug!(max_tokens = config.max_tokens, "max_tokensを適用します");
            builder.max_tokens(config.max_tokens).build()?
        }
        TokenLimitStrategy::MaxCompletionTokens => {
            debug!(max_completion_tokens = config.max_completion_tokens, "max_completion_tokensを適用します");
            builder.max_completion_tokens(config.max_completion_tokens).build()?
        }
    };

    Ok(req)
}
