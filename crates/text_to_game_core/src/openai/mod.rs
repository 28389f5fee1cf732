//! OpenAI互換APIとの連携

pub mod client;
pub mod history;
pub mod prompt;
pub mod request;

// 代表的な公開APIを再エクスポート
pub use client::OpenAiChatModel;
pub use history::ConversationHistory;
pub use prompt::SYSTEM_PROMPT;
pub use request::build_chat_request;
