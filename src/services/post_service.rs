//! Post service - post creation, listings, and display preparation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{DATETIME_FORMAT, DATE_FORMAT};
use crate::domain::{post, Post, PostDetail, PostListItem};
use crate::errors::{AppResult, PostError};
use crate::infra::PostRepository;
use crate::upload::{FileUpload, UploadPipeline, UploadStatus};

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a new post, optionally storing an uploaded image.
    ///
    /// The image is relocated into public storage before the row is
    /// written, so a failed relocation never leaves a dangling database
    /// reference. The reverse (a stored file without a row, after a
    /// mid-request crash) is accepted; there is no cleanup pass.
    async fn create_post(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
        upload: Option<FileUpload>,
    ) -> Result<Post, PostError>;

    /// List all posts newest-first, prepared for the overview page
    async fn list_posts(&self) -> AppResult<Vec<PostListItem>>;

    /// Fetch a single post prepared for the detail page
    async fn get_post(&self, id: i64) -> AppResult<Option<PostDetail>>;
}

/// Concrete implementation of PostService
pub struct PostManager {
    posts: Arc<dyn PostRepository>,
    pipeline: UploadPipeline,
}

impl PostManager {
    /// Create new post service instance
    pub fn new(posts: Arc<dyn PostRepository>, pipeline: UploadPipeline) -> Self {
        Self { posts, pipeline }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(
        &self,
        author_id: i64,
        title: &str,
        content: &str,
        upload: Option<FileUpload>,
    ) -> Result<Post, PostError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(PostError::FillRequiredFields);
        }

        let image_url = match upload {
            Some(upload) => match upload.status {
                UploadStatus::Ok => Some(self.pipeline.store(upload)?),
                UploadStatus::NoFile => None,
                // The transfer never completed; usually the server-wide
                // size cap cut it off
                UploadStatus::ExceededServerLimit | UploadStatus::OtherError => {
                    return Err(PostError::ServerLimitExceeded)
                }
            },
            None => None,
        };

        self.posts
            .create(author_id, title.to_string(), content.to_string(), image_url)
            .await
            .map_err(|e| {
                tracing::error!("Failed to persist post: {}", e);
                PostError::Database
            })
    }

    async fn list_posts(&self) -> AppResult<Vec<PostListItem>> {
        let posts = self.posts.find_all().await?;

        Ok(posts
            .into_iter()
            .map(|entry| PostListItem {
                id: entry.post.id,
                title: entry.post.title,
                author: entry.author,
                image_url: entry.post.image_url,
                display_date: entry.post.created_at.format(DATE_FORMAT).to_string(),
                preview: post::preview(&entry.post.content),
            })
            .collect())
    }

    async fn get_post(&self, id: i64) -> AppResult<Option<PostDetail>> {
        let found = self.posts.find_by_id(id).await?;

        Ok(found.map(|entry| PostDetail {
            id: entry.post.id,
            title: entry.post.title,
            content: entry.post.content,
            author: entry.author,
            image_url: entry.post.image_url,
            display_date: entry.post.created_at.format(DATETIME_FORMAT).to_string(),
        }))
    }
}
