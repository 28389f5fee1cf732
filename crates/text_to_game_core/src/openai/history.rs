use crate::types::{ChatTurn, Role};
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Conversation sent to the chat completions endpoint.
///
/// Invariant: the system message, when set, is always sent first; the rest
/// keeps push order (push order == send order).
#[derive(Debug, Default, Clone)]
pub struct ConversationHistory {
    system: Option<ChatCompletionRequestMessage>,
    messages: Vec<ChatCompletionRequestMessage>,
}

impl ConversationHistory {
    /// Create empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create history with the given system instruction.
    pub fn with_system<S: AsRef<str>>(system: S) -> Result<Self, OpenAIError> {
        let msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system.as_ref())
            .build()?;
        Ok(Self {
            system: Some(msg.into()),
            messages: Vec::new(),
        })
    }

    /// Build from caller-supplied turns, keeping their order.
    pub fn from_turns<S: AsRef<str>>(system: S, turns: &[ChatTurn]) -> Result<Self, OpenAIError> {
        let mut history = Self::with_system(system)?;
        for turn in turns {
            match turn.role {
                Role::User => history.add_user(&turn.content)?,
                Role::Assistant => history.add_assistant(&turn.content)?,
            };
        }
        Ok(history)
    }

    /// Number of non-system messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Is empty (system message not counted).
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages without the system instruction.
    pub fn as_slice(&self) -> &[ChatCompletionRequestMessage] {
        &self.messages
    }

    /// システムメッセージを先頭に付けた送信用の配列
    pub fn as_slice_with_system(&self) -> Vec<ChatCompletionRequestMessage> {
        self.system
            .iter()
            .chain(self.messages.iter())
            .cloned()
            .collect()
    }

    /// Add user message.
    pub fn add_user<S: AsRef<str>>(&mut self, content: S) -> Result<&mut Self, OpenAIError> {
        let msg = ChatCompletionRequestUserMessageArgs::default()
            .content(content.as_ref())
            .build()?;
        self.messages.push(msg.into());
        Ok(self)
    }

    /// Add assistant message (text only).
    pub fn add_assistant<S: AsRef<str>>(&mut self, content: S) -> Result<&mut Self, OpenAIError> {
        let msg = ChatCompletionRequestAssistantMessageArgs::default()
            .content(content.as_ref())
            .build()?;
        self.messages.push(msg.into());
        Ok(self)
    }
}

/// Keep at most `limit` of the newest turns, never starting on an assistant turn.
pub fn bound_turns(turns: &[ChatTurn], limit: usize) -> &[ChatTurn] {
    let start = turns.len().saturating_sub(limit);
    let window = &turns[start..];
    let first_user = window
        .iter()
        .position(|t| t.role == Role::User)
        .unwrap_or(window.len());
    &window[first_user..]
}
