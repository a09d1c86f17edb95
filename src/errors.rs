//! Centralized error handling.
//!
//! `AppError` is the unified infrastructure error for the whole application,
//! with automatic HTTP response conversion. Validation outcomes that users
//! can correct are modeled separately as `RegisterError` and `PostError`;
//! each kind maps to a translation key and is rendered into the error list
//! of the originating form, never as a bare HTTP error.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found")]
    NotFound,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Session error")]
    Session(#[from] tower_sessions::session::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::UsernameTaken | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Session(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Session(e) => {
                tracing::error!("Session error: {:?}", e);
                "A session error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Html(format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p></body></html>",
            status.as_u16(),
            self.user_message()
        ));

        (status, body).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Registration failure kinds.
///
/// Validation is ordered and short-circuits; callers receive exactly one
/// kind per attempt. `Storage` covers persistence failures that are not the
/// duplicate-username race.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    #[error("username contains characters outside the allow-list")]
    InvalidChars,

    #[error("username length outside the allowed range")]
    InvalidLength,

    #[error("password shorter than the minimum length")]
    PasswordTooShort,

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("username already taken")]
    UsernameTaken,

    #[error("storage failure")]
    Storage,
}

impl RegisterError {
    /// Translation key for the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            RegisterError::InvalidChars => "err_username_chars",
            RegisterError::InvalidLength => "err_username_length",
            RegisterError::PasswordTooShort => "err_pw_too_short",
            RegisterError::PasswordMismatch => "err_pw_mismatch",
            RegisterError::UsernameTaken => "err_user_taken",
            RegisterError::Storage => "err_db",
        }
    }
}

/// Post creation failure kinds.
///
/// The two size failures are distinct on purpose: `ServerLimitExceeded`
/// means the transport aborted the transfer at the server-wide cap, while
/// `ImageTooLarge` is the application policy applied to an accepted payload.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostError {
    #[error("title or content empty")]
    FillRequiredFields,

    #[error("image exceeds the size policy")]
    ImageTooLarge,

    #[error("image extension not in the allow-list")]
    ImageTypeNotAllowed,

    #[error("image could not be stored")]
    ImageSaveFailed,

    #[error("upload exceeded the server-wide limit")]
    ServerLimitExceeded,

    #[error("database failure")]
    Database,
}

impl PostError {
    /// Translation key for the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            PostError::FillRequiredFields => "err_fill_fields",
            PostError::ImageTooLarge => "err_img_too_big",
            PostError::ImageTypeNotAllowed => "err_img_type",
            PostError::ImageSaveFailed => "err_img_save",
            PostError::ServerLimitExceeded => "err_server_limit",
            PostError::Database => "err_db",
        }
    }
}
