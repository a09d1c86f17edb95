//! Language switcher handler.

use axum::{
    extract::Query,
    http::{header, HeaderMap},
    response::Redirect,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::i18n::Lang;

/// Language switch request
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub code: Option<String>,
}

/// Create language switcher routes
pub fn language_routes() -> Router<AppState> {
    Router::new().route("/language", get(switch_language))
}

/// Store an allow-listed language code in the session and bounce back.
///
/// Unknown codes leave the session untouched.
async fn switch_language(
    ctx: SessionContext,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> AppResult<Redirect> {
    if let Some(lang) = query.code.as_deref().and_then(Lang::from_code) {
        ctx.set_lang(lang).await?;
    }

    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");

    Ok(Redirect::to(back))
}
