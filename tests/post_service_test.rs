//! Post service unit tests.

use std::io::Write;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tempfile::{tempdir, NamedTempFile};

use miniblog::domain::{Post, PostWithAuthor};
use miniblog::errors::{AppError, PostError};
use miniblog::infra::MockPostRepository;
use miniblog::services::{PostManager, PostService};
use miniblog::upload::{FileUpload, UploadPipeline};

fn test_post(id: i64, user_id: i64, title: &str, content: &str, image_url: Option<&str>) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        content: content.to_string(),
        image_url: image_url.map(str::to_string),
        created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
    }
}

fn service_with(repo: MockPostRepository, dir: &std::path::Path) -> PostManager {
    PostManager::new(Arc::new(repo), UploadPipeline::new(dir))
}

fn spooled_upload(name: &str, size: u64) -> FileUpload {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(b"image bytes").unwrap();
    FileUpload::received(temp, name.to_string(), size)
}

#[tokio::test]
async fn test_create_post_rejects_empty_fields() {
    let dir = tempdir().unwrap();
    // No expectations: validation fails before any persistence
    let service = service_with(MockPostRepository::new(), dir.path());

    let empty_title = service.create_post(1, "", "World", None).await;
    assert_eq!(empty_title.unwrap_err(), PostError::FillRequiredFields);

    let blank_content = service.create_post(1, "Hello", "   ", None).await;
    assert_eq!(blank_content.unwrap_err(), PostError::FillRequiredFields);
}

#[tokio::test]
async fn test_create_post_without_file_persists_null_image() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .withf(|user_id, title, content, image_url| {
            *user_id == 1 && title == "Hello" && content == "World" && image_url.is_none()
        })
        .returning(|user_id, title, content, _| Ok(test_post(1, user_id, &title, &content, None)));

    let service = service_with(repo, dir.path());
    let post = service.create_post(1, "Hello", "World", None).await.unwrap();

    assert_eq!(post.title, "Hello");
    assert!(post.image_url.is_none());
}

#[tokio::test]
async fn test_create_post_trims_fields() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .withf(|_, title, content, _| title == "Hello" && content == "World")
        .returning(|user_id, title, content, _| Ok(test_post(1, user_id, &title, &content, None)));

    let service = service_with(repo, dir.path());
    let result = service.create_post(1, "  Hello  ", "  World  ", None).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_post_no_file_status_persists_null_image() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .withf(|_, _, _, image_url| image_url.is_none())
        .returning(|user_id, title, content, _| Ok(test_post(1, user_id, &title, &content, None)));

    let service = service_with(repo, dir.path());
    let result = service
        .create_post(1, "Hello", "World", Some(FileUpload::no_file()))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_post_stores_image_and_reference() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .withf(|_, _, _, image_url| {
            matches!(image_url, Some(url) if url.starts_with("uploads/") && url.ends_with(".png"))
        })
        .returning(|user_id, title, content, image_url| {
            Ok(test_post(1, user_id, &title, &content, image_url.as_deref()))
        });

    let service = service_with(repo, dir.path());
    let post = service
        .create_post(1, "Hello", "World", Some(spooled_upload("photo.png", 1024)))
        .await
        .unwrap();

    // The image landed in the target directory under its generated name
    let reference = post.image_url.unwrap();
    let file_name = reference.strip_prefix("uploads/").unwrap();
    assert!(dir.path().join(file_name).exists());
}

#[tokio::test]
async fn test_create_post_size_boundary() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .returning(|user_id, title, content, image_url| {
            Ok(test_post(1, user_id, &title, &content, image_url.as_deref()))
        });

    let service = service_with(repo, dir.path());

    // Exactly 5 MiB passes
    let at_limit = service
        .create_post(1, "Hello", "World", Some(spooled_upload("a.png", 5_242_880)))
        .await;
    assert!(at_limit.is_ok());

    // One byte over fails
    let over_limit = service
        .create_post(1, "Hello", "World", Some(spooled_upload("b.png", 5_242_881)))
        .await;
    assert_eq!(over_limit.unwrap_err(), PostError::ImageTooLarge);
}

#[tokio::test]
async fn test_create_post_rejects_disallowed_extension() {
    let dir = tempdir().unwrap();
    let service = service_with(MockPostRepository::new(), dir.path());

    for name in ["evil.exe", "vector.svg", "shell.php"] {
        let result = service
            .create_post(1, "Hello", "World", Some(spooled_upload(name, 100)))
            .await;
        assert_eq!(result.unwrap_err(), PostError::ImageTypeNotAllowed, "{name}");
    }
}

#[tokio::test]
async fn test_create_post_accepts_uppercase_extension() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .returning(|user_id, title, content, image_url| {
            Ok(test_post(1, user_id, &title, &content, image_url.as_deref()))
        });

    let service = service_with(repo, dir.path());
    let result = service
        .create_post(1, "Hello", "World", Some(spooled_upload("PHOTO.JPG", 100)))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_post_server_limit_exceeded() {
    let dir = tempdir().unwrap();
    let service = service_with(MockPostRepository::new(), dir.path());

    let result = service
        .create_post(
            1,
            "Hello",
            "World",
            Some(FileUpload::exceeded_server_limit("big.png".to_string())),
        )
        .await;

    assert_eq!(result.unwrap_err(), PostError::ServerLimitExceeded);
}

#[tokio::test]
async fn test_create_post_database_failure() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_create()
        .returning(|_, _, _, _| Err(AppError::Database(sea_orm::DbErr::Custom("boom".to_string()))));

    let service = service_with(repo, dir.path());
    let result = service.create_post(1, "Hello", "World", None).await;

    assert_eq!(result.unwrap_err(), PostError::Database);
}

#[tokio::test]
async fn test_list_posts_prepares_display_fields() {
    let dir = tempdir().unwrap();

    let content = "x".repeat(250);
    let mut repo = MockPostRepository::new();
    repo.expect_find_all().returning(move || {
        Ok(vec![
            PostWithAuthor {
                post: test_post(2, 1, "Second", &content, None),
                author: "alice1".to_string(),
            },
            PostWithAuthor {
                post: test_post(1, 1, "First", "World", Some("uploads/a.png")),
                author: "alice1".to_string(),
            },
        ])
    });

    let service = service_with(repo, dir.path());
    let posts = service.list_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    // Repository order (newest first) is preserved
    assert_eq!(posts[0].title, "Second");
    assert_eq!(posts[0].display_date, "02.01.2026");
    assert_eq!(posts[0].preview, format!("{}...", "x".repeat(200)));
    // Short content is not truncated and carries no ellipsis
    assert_eq!(posts[1].preview, "World");
    assert_eq!(posts[1].image_url.as_deref(), Some("uploads/a.png"));
}

#[tokio::test]
async fn test_get_post_prepares_detail_fields() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_find_by_id().returning(|id| {
        Ok(Some(PostWithAuthor {
            post: test_post(id, 1, "Hello", "World", None),
            author: "alice1".to_string(),
        }))
    });

    let service = service_with(repo, dir.path());
    let post = service.get_post(7).await.unwrap().unwrap();

    assert_eq!(post.id, 7);
    assert_eq!(post.author, "alice1");
    // Detail view shows date and time
    assert_eq!(post.display_date, "02.01.2026 03:04");
    // Full content, never a preview
    assert_eq!(post.content, "World");
}

#[tokio::test]
async fn test_get_post_missing_returns_none() {
    let dir = tempdir().unwrap();

    let mut repo = MockPostRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = service_with(repo, dir.path());
    assert!(service.get_post(999).await.unwrap().is_none());
}
