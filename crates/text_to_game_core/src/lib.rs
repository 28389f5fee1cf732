//! text_to_game_core
//!
//! 自然言語の説明からブラウザゲームを生成するためのコアクレート。
//! ホストされたLLMへの会話中継と、応答からのゲームコード抽出を提供する。
//! Web層からはこのクレートの `GameService` だけを使う。

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod openai;
pub mod services;
pub mod types;

// 主要な型を再エクスポート
pub use config::GameConfig;
pub use error::GameError;
pub use extract::extract_game;
pub use model::ChatModel;
pub use services::GameService;
pub use types::{ChatTurn, GenerationResult, Role};
