use color_eyre::Result;
use text_to_game_core::{GameConfig, GameService};
use text_to_game_web::{router, AppState};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BIND_ADDR_ENV: &str = "GAME_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<()> {
    // エラーハンドリングの初期化
    color_eyre::install()?;

    // 環境変数のロード（.envがなくても無視）
    let _ = dotenvy::dotenv();

    // ロギングの初期化: 標準出力 + 日次ローテーションのファイル
    let file_appender = rolling::daily("logs", "web.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,text_to_game_web=debug"))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    tracing::info!(target: "text_to_game_web", "Starting web server...");

    let config = GameConfig::from_env()?;
    tracing::info!(
        target: "text_to_game_web",
        model = %config.model,
        history_limit = config.history_limit,
        timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let service = GameService::from_config(config)?;
    let app = router(AppState::new(service));

    let bind_addr = std::env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    let addr = listener.local_addr()?;
    tracing::info!(target: "text_to_game_web", "🚀 Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
