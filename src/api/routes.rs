//! Application route configuration.

use axum::{http::StatusCode, response::IntoResponse, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use super::extractors::SessionContext;
use super::handlers::{auth_routes, home_routes, language_routes, post_routes};
use super::AppState;
use crate::config::STATIC_DIR;
use crate::views;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Session cookies last for the browser session; the in-memory store
    // does not survive restarts
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnSessionEnd);

    Router::new()
        .merge(home_routes())
        .merge(auth_routes())
        .merge(language_routes())
        .merge(post_routes())
        // Uploaded images and static assets
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched routes get the localized not-found page
async fn not_found(ctx: SessionContext) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::not_found(ctx.lang(), ctx.current_username()),
    )
}
