use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Apology shown in the chat when a generation fails.
pub const APOLOGY: &str = "Üzgünüm, bir hata oluştu. Lütfen tekrar deneyin.";

/// チャットとゲームプレビューのページテンプレート
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub apology: &'a str,
}

/// GET / - チャット + プレビューページ
pub async fn home() -> impl IntoResponse {
    let template = IndexTemplate { apology: APOLOGY };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {}", e),
        )
            .into_response(),
    }
}
