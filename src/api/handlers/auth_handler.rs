//! Authentication handlers: login, registration, logout.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::i18n::translate;
use crate::views;

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// User registration request
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub password_repeat: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(login_submit))
        .route("/register", get(register_form).post(register_submit))
        .route("/logout", get(logout))
}

/// Render the login form
async fn login_form(ctx: SessionContext) -> Html<String> {
    views::login(ctx.lang(), ctx.current_username(), &[])
}

/// Process a login attempt.
///
/// An unknown user and a wrong password produce the same message.
async fn login_submit(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match state
        .auth_service
        .authenticate(&form.username, &form.password)
        .await?
    {
        Some(user) => {
            ctx.log_in(&user).await?;
            Ok(Redirect::to("/").into_response())
        }
        None => {
            let errors = vec![translate(ctx.lang(), "err_login_failed").to_string()];
            Ok(views::login(ctx.lang(), ctx.current_username(), &errors).into_response())
        }
    }
}

/// Render the registration form
async fn register_form(ctx: SessionContext) -> Html<String> {
    views::register(ctx.lang(), ctx.current_username(), &[])
}

/// Process a registration attempt
async fn register_submit(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<RegisterForm>,
) -> Response {
    match state
        .auth_service
        .register(&form.username, &form.password, &form.password_repeat)
        .await
    {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(e) => {
            let errors = vec![translate(ctx.lang(), e.message_key()).to_string()];
            views::register(ctx.lang(), ctx.current_username(), &errors).into_response()
        }
    }
}

/// Clear the session and return home
async fn logout(ctx: SessionContext) -> AppResult<Redirect> {
    ctx.log_out().await?;
    Ok(Redirect::to("/"))
}
