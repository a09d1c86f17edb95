//! Session context extractor - request-scoped view of the session.
//!
//! Handlers receive the authenticated user and the language preference as
//! an explicit argument instead of reading ambient session state. The
//! session itself stays owned by the transport layer
//! (`tower_sessions::SessionManagerLayer`); this extractor reads it once
//! per request and offers the few mutations the application needs.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::config::{SESSION_LANG, SESSION_USERNAME, SESSION_USER_ID};
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::i18n::Lang;

/// Authenticated user as recorded in the session
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
}

/// Request-scoped session state, threaded into handlers as an argument.
pub struct SessionContext {
    session: Session,
    user: Option<SessionUser>,
    lang: Lang,
}

impl SessionContext {
    /// The authenticated user, if any
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Display name of the authenticated user, if any
    pub fn current_username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// The request's language preference
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Record a successful login in the session.
    pub async fn log_in(&self, user: &User) -> AppResult<()> {
        self.session.insert(SESSION_USER_ID, user.id).await?;
        self.session
            .insert(SESSION_USERNAME, user.username.clone())
            .await?;
        Ok(())
    }

    /// Clear the session entirely and invalidate its cookie.
    pub async fn log_out(&self) -> AppResult<()> {
        self.session.flush().await?;
        Ok(())
    }

    /// Store the language preference.
    pub async fn set_lang(&self, lang: Lang) -> AppResult<()> {
        self.session.insert(SESSION_LANG, lang.code()).await?;
        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal(msg))?;

        let user_id = session.get::<i64>(SESSION_USER_ID).await?;
        let username = session.get::<String>(SESSION_USERNAME).await?;

        let user = match (user_id, username) {
            (Some(id), Some(name)) => Some(SessionUser { id, name }),
            _ => None,
        };

        let lang = session
            .get::<String>(SESSION_LANG)
            .await?
            .and_then(|code| Lang::from_code(&code))
            .unwrap_or_default();

        Ok(Self {
            session,
            user,
            lang,
        })
    }
}
