//! async-openai を使った `ChatModel` 実装

use crate::config::GameConfig;
use crate::model::ChatModel;
use crate::openai::{build_chat_request, ConversationHistory};
use crate::types::ChatTurn;
use async_openai::config::OpenAIConfig;
use async_openai::Client;
use async_trait::async_trait;
use color_eyre::Result;
use tracing::{debug, info, instrument};

/// Chat model reached through an OpenAI-compatible chat completions API.
pub struct OpenAiChatModel {
    client: Client<OpenAIConfig>,
    config: GameConfig,
}

impl OpenAiChatModel {
    /// 設定からクライアントを構築する（タイムアウト付きHTTPクライアントを使用）
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new();
        if let Some(key) = &config.api_key {
            openai_config = openai_config.with_api_key(key);
        }
        if let Some(base) = &config.api_base {
            openai_config = openai_config.with_api_base(base);
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let client = Client::with_config(openai_config).with_http_client(http_client);
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    fn model_id(&self) -> &str {
        &self.config.model
    }

    #[instrument(name = "openai_complete", skip(self, system, turns), fields(turns = turns.len()))]
    async fn complete(&self, system: &str, turns: &[ChatTurn]) -> Result<String> {
        let history = ConversationHistory::from_turns(system, turns)?;
        let req = build_chat_request(&history, &self.config)?;

        info!(target: "openai", "request: model={}, messages={}", self.config.model, history.len());
        let resp = self.client.chat().create(req).await?;
        debug!(target: "openai", "response_choices: {}", resp.choices.len());

        // テキストがない応答は空文字列として扱う
        let text = resp
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();
        Ok(text)
    }
}
