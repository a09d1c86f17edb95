//! Authentication service unit tests.

use std::sync::Arc;

use chrono::Utc;

use miniblog::domain::{Password, User};
use miniblog::errors::{AppError, RegisterError};
use miniblog::infra::MockUserRepository;
use miniblog::services::{AuthService, Authenticator};

fn test_user(id: i64, username: &str, password_hash: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_register_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .withf(|name| name == "alice1")
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|username, _| username == "alice1")
        .returning(|username, password_hash| Ok(test_user(1, &username, &password_hash)));

    let service = Authenticator::new(Arc::new(repo));
    let user = service
        .register("alice1", "password123", "password123")
        .await
        .unwrap();

    assert_eq!(user.username, "alice1");
    // The stored hash is salted and verifies against the original password
    assert_ne!(user.password_hash, "password123");
    assert!(Password::from_hash(user.password_hash).verify("password123"));
}

#[tokio::test]
async fn test_register_trims_username() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .withf(|name| name == "alice1")
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|username, _| username == "alice1")
        .returning(|username, password_hash| Ok(test_user(1, &username, &password_hash)));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .register("  alice1  ", "password123", "password123")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_register_rejects_invalid_characters() {
    // No repository expectations: validation short-circuits before any lookup
    let service = Authenticator::new(Arc::new(MockUserRepository::new()));

    for name in ["bad name", "bad!name", "", "ümlaut", "a b"] {
        let result = service.register(name, "password123", "password123").await;
        assert_eq!(result.unwrap_err(), RegisterError::InvalidChars, "{name:?}");
    }
}

#[tokio::test]
async fn test_register_character_check_wins_over_password_checks() {
    let service = Authenticator::new(Arc::new(MockUserRepository::new()));

    // The password is also invalid, but the first failing rule reports
    let result = service.register("bad name", "x", "y").await;
    assert_eq!(result.unwrap_err(), RegisterError::InvalidChars);
}

#[tokio::test]
async fn test_register_rejects_bad_lengths() {
    let service = Authenticator::new(Arc::new(MockUserRepository::new()));

    let too_long = "a".repeat(19);
    for name in ["ab", too_long.as_str()] {
        let result = service.register(name, "password123", "password123").await;
        assert_eq!(result.unwrap_err(), RegisterError::InvalidLength, "{name:?}");
    }
}

#[tokio::test]
async fn test_register_accepts_boundary_lengths() {
    let longest = "a".repeat(18);
    for name in ["abc", longest.as_str()] {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|username, password_hash| Ok(test_user(1, &username, &password_hash)));

        let service = Authenticator::new(Arc::new(repo));
        let result = service.register(name, "password123", "password123").await;
        assert!(result.is_ok(), "{name:?}");
    }
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let service = Authenticator::new(Arc::new(MockUserRepository::new()));

    let result = service.register("alice1", "1234567", "1234567").await;
    assert_eq!(result.unwrap_err(), RegisterError::PasswordTooShort);
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let service = Authenticator::new(Arc::new(MockUserRepository::new()));

    let result = service
        .register("alice1", "password123", "password124")
        .await;
    assert_eq!(result.unwrap_err(), RegisterError::PasswordMismatch);
}

#[tokio::test]
async fn test_register_rejects_taken_username() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(|name| Ok(Some(test_user(1, name, "hash"))));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .register("alice1", "password123", "password123")
        .await;

    assert_eq!(result.unwrap_err(), RegisterError::UsernameTaken);
}

#[tokio::test]
async fn test_register_duplicate_insert_race_reports_username_taken() {
    // The lookup saw nothing, but a concurrent registration won the insert;
    // the store's unique constraint reports it
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_create()
        .returning(|_, _| Err(AppError::UsernameTaken));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .register("alice1", "password123", "password123")
        .await;

    assert_eq!(result.unwrap_err(), RegisterError::UsernameTaken);
}

#[tokio::test]
async fn test_register_storage_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_create()
        .returning(|_, _| Err(AppError::Database(sea_orm::DbErr::Custom("boom".to_string()))));

    let service = Authenticator::new(Arc::new(repo));
    let result = service
        .register("alice1", "password123", "password123")
        .await;

    assert_eq!(result.unwrap_err(), RegisterError::Storage);
}

#[tokio::test]
async fn test_authenticate_round_trip() {
    let hash = Password::new("password123").unwrap().into_string();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |name| match name {
            "alice1" => Ok(Some(test_user(1, "alice1", &hash))),
            _ => Ok(None),
        });

    let service = Authenticator::new(Arc::new(repo));

    let user = service.authenticate("alice1", "password123").await.unwrap();
    assert_eq!(user.unwrap().username, "alice1");

    // Wrong password and unknown user are indistinguishable
    let wrong_password = service.authenticate("alice1", "wrongpass").await.unwrap();
    assert!(wrong_password.is_none());

    let unknown_user = service.authenticate("nosuchuser", "x").await.unwrap();
    assert!(unknown_user.is_none());
}
