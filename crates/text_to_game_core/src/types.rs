//! 会話とゲーム生成結果のデータ型

use serde::{Deserialize, Serialize};

/// 発話者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message of a conversation, as re-sent by the caller on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// モデル応答を説明文とゲームHTMLに分割した結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationResult {
    /// コードブロックより前の説明文
    pub message: String,
    /// ```html ブロックの中身。ブロックがなければ空文字列
    pub game_markup: String,
}

impl GenerationResult {
    pub fn has_game(&self) -> bool {
        !self.game_markup.is_empty()
    }
}
