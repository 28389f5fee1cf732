//! モデル応答からゲームコードを取り出す
//!
//! 応答は「説明文 → `KOD:` → ```html ブロック」の形式を想定している。
//! 最初に見つかったブロックだけを使う。

use crate::types::GenerationResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening marker of the game block; the description is everything before it.
pub const HTML_FENCE: &str = "```html";

/// Label the system prompt asks the model to print right before the block.
const CODE_LABEL: &str = "KOD:";

static HTML_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```html\r?\n(.*?)\r?\n```").expect("valid regex")
});

/// Split a raw model reply into its description and the fenced HTML game.
///
/// Without a fenced block the reply is returned untouched as `message` and
/// `game_markup` is empty.
pub fn extract_game(reply: &str) -> GenerationResult {
    let Some(captures) = HTML_BLOCK.captures(reply) else {
        return GenerationResult {
            message: reply.to_string(),
            game_markup: String::new(),
        };
    };

    let game_markup = captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let before = reply.split(HTML_FENCE).next().unwrap_or_default();

    GenerationResult {
        message: strip_code_label(before.trim()).to_string(),
        game_markup,
    }
}

/// 末尾の `KOD:` 行を取り除く
fn strip_code_label(description: &str) -> &str {
    match description.strip_suffix(CODE_LABEL) {
        Some(rest) if rest.is_empty() || rest.ends_with('\n') => rest.trim_end(),
        _ => description,
    }
}
