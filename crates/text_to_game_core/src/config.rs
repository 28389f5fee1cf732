//! アプリケーション設定
//!
//! 値はすべて環境変数（`.env` 可）から読み込み、未設定ならデフォルトを使う。

use color_eyre::eyre::{Result, WrapErr};
use std::str::FromStr;
use std::time::Duration;

pub const MODEL_ENV: &str = "GAME_MODEL";
pub const MAX_TOKENS_ENV: &str = "GAME_MAX_TOKENS";
pub const MAX_COMPLETION_TOKENS_ENV: &str = "GAME_MAX_COMPLETION_TOKENS";
pub const HISTORY_LIMIT_ENV: &str = "GAME_HISTORY_LIMIT";
pub const REQUEST_TIMEOUT_ENV: &str = "GAME_REQUEST_TIMEOUT_SECS";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const API_BASE_ENV: &str = "OPENAI_API_BASE";

/// ゲーム生成の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// モデル名
    pub model: String,
    /// 最大トークン数（4o系モデル向け）
    pub max_tokens: u32,
    /// 最大補完トークン数（5系モデル向け）
    pub max_completion_tokens: u32,
    /// 上流に転送する会話履歴の最大ターン数
    pub history_limit: usize,
    /// 上流呼び出しのタイムアウト（秒）
    pub request_timeout_secs: u64,
    /// APIキー。`None` ならasync-openaiのデフォルト（OPENAI_API_KEY）に任せる
    pub api_key: Option<String>,
    /// OpenAI互換エンドポイントのベースURL
    pub api_base: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4096,
            max_completion_tokens: 4096,
            history_limit: 20,
            request_timeout_secs: 120,
            api_key: None,
            api_base: None,
        }
    }
}

impl GameConfig {
    /// 新しい設定インスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            model: get(MODEL_ENV).unwrap_or(defaults.model),
            max_tokens: parse_or(get(MAX_TOKENS_ENV), MAX_TOKENS_ENV, defaults.max_tokens)?,
            max_completion_tokens: parse_or(
                get(MAX_COMPLETION_TOKENS_ENV),
                MAX_COMPLETION_TOKENS_ENV,
                defaults.max_completion_tokens,
            )?,
            history_limit: parse_or(get(HISTORY_LIMIT_ENV), HISTORY_LIMIT_ENV, defaults.history_limit)?,
            request_timeout_secs: parse_or(
                get(REQUEST_TIMEOUT_ENV),
                REQUEST_TIMEOUT_ENV,
                defaults.request_timeout_secs,
            )?,
            api_key: get(API_KEY_ENV),
            api_base: get(API_BASE_ENV),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .wrap_err_with(|| format!("{key} has an invalid value: {value:?}")),
    }
}
