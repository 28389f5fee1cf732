#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::sync::Once;
use text_to_game_core::{ChatModel, ChatTurn};
use tracing_subscriber::{fmt, EnvFilter, prelude::*};
use tracing_appender::rolling;

static START: Once = Once::new();
static _GUARD: Lazy<std::sync::Mutex<Option<tracing_appender::non_blocking::WorkerGuard>>> = Lazy::new(|| std::sync::Mutex::new(None));

/// Initialize test environment: dotenv and tracing (stderr + file).
/// Idempotent: safe to call multiple times.
pub fn init() {
    START.call_once(|| {
        let _ = dotenvy::dotenv();
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .expect("env filter");

        // Daily rotating log file separate from app runtime logs
        let file_appender = rolling::daily("logs", "tests.log");
        let (file_nb, guard) = tracing_appender::non_blocking(file_appender);
        *_GUARD.lock().unwrap() = Some(guard);

        let stderr_layer = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(file_nb);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init();

        tracing::info!(target="test_init", "Test tracing initialized (stderr + rotating file)");
    });
}

/// Canned model: records every call and answers with a fixed reply or error.
pub struct ScriptedModel {
    reply: Result<String, String>,
    pub calls: std::sync::Mutex<Vec<(String, Vec<ChatTurn>)>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Self {
        Self { reply: Ok(reply.to_string()), calls: Default::default() }
    }

    pub fn failing(error: &str) -> Self {
        Self { reply: Err(error.to_string()), calls: Default::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_turns(&self) -> Vec<ChatTurn> {
        self.calls.lock().unwrap().last().map(|(_, t)| t.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ChatModel for ScriptedModel {
    fn model_id(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, system: &str, turns: &[ChatTurn]) -> color_eyre::Result<String> {
        self.calls.lock().unwrap().push((system.to_string(), turns.to_vec()));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(color_eyre::eyre::eyre!("{e}")),
        }
    }
}
