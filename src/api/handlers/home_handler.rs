//! Homepage handler.

use axum::{extract::State, response::Html, routing::get, Router};

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::views;

/// Create homepage routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Render the post overview
async fn index(State(state): State<AppState>, ctx: SessionContext) -> AppResult<Html<String>> {
    let posts = state.post_service.list_posts().await?;

    Ok(views::home(
        ctx.lang(),
        ctx.current_username(),
        &posts,
        &[],
    ))
}
