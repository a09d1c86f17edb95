//! Authentication service - registration and login checks.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult, RegisterError};
use crate::infra::UserRepository;

/// Characters a username may consist of
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z0-9_]+$").expect("valid username pattern"));

/// Well-formed hash that no password verifies against; used when the user
/// does not exist so both login failures take the same verification work.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a username/password pair.
    ///
    /// Returns `Ok(None)` for an unknown user and for a wrong password
    /// alike; callers cannot tell the two apart.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>>;

    /// Register a new user.
    ///
    /// Validation short-circuits on the first failure; see
    /// [`RegisterError`] for the kinds. On success the password is hashed
    /// and the user persisted.
    async fn register(
        &self,
        username: &str,
        password: &str,
        password_repeat: &str,
    ) -> Result<User, RegisterError>;
}

/// Concrete implementation of AuthService
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let user = self.users.find_by_username(username).await?;

        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::from_hash(DUMMY_HASH.to_string()),
        };

        let password_valid = stored.verify(password);

        Ok(match user {
            Some(user) if password_valid => Some(user),
            _ => None,
        })
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        password_repeat: &str,
    ) -> Result<User, RegisterError> {
        let username = username.trim();

        if !USERNAME_PATTERN.is_match(username) {
            return Err(RegisterError::InvalidChars);
        }
        if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
            return Err(RegisterError::InvalidLength);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(RegisterError::PasswordTooShort);
        }
        if password != password_repeat {
            return Err(RegisterError::PasswordMismatch);
        }

        // Pre-check for a friendlier failure; the store's unique constraint
        // still decides concurrent registrations for the same name
        let taken = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| storage_failure("registration lookup", e))?;
        if taken.is_some() {
            return Err(RegisterError::UsernameTaken);
        }

        let password_hash = Password::new(password)
            .map_err(|e| storage_failure("password hashing", e))?
            .into_string();

        self.users
            .create(username.to_string(), password_hash)
            .await
            .map_err(|e| match e {
                AppError::UsernameTaken => RegisterError::UsernameTaken,
                other => storage_failure("user creation", other),
            })
    }
}

fn storage_failure(context: &str, e: AppError) -> RegisterError {
    tracing::error!("Registration failed during {}: {}", context, e);
    RegisterError::Storage
}
