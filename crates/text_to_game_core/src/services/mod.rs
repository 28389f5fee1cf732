//! サービス層
//!
//! UI層（Web）から独立した形でゲーム生成機能を提供する。

pub mod game_service;

pub use game_service::{GameService, FALLBACK_MESSAGE};
