//! Comment service - comment validation, persistence, and display preparation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DATETIME_FORMAT;
use crate::domain::CommentView;
use crate::errors::AppResult;
use crate::infra::CommentRepository;

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Add a comment to a post.
    ///
    /// Invalid input (non-positive post id, empty content after trim) is a
    /// silent no-op: nothing is persisted and no message surfaces. Returns
    /// whether a comment was stored.
    async fn add_comment(&self, post_id: i64, author_id: i64, content: &str) -> bool;

    /// List a post's comments newest-first, prepared for display
    async fn comments_for_post(&self, post_id: i64) -> AppResult<Vec<CommentView>>;
}

/// Concrete implementation of CommentService
pub struct CommentManager {
    comments: Arc<dyn CommentRepository>,
}

impl CommentManager {
    /// Create new comment service instance
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl CommentService for CommentManager {
    async fn add_comment(&self, post_id: i64, author_id: i64, content: &str) -> bool {
        let content = content.trim();

        if post_id <= 0 || content.is_empty() {
            return false;
        }

        match self
            .comments
            .create(post_id, author_id, content.to_string())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Failed to persist comment: {}", e);
                false
            }
        }
    }

    async fn comments_for_post(&self, post_id: i64) -> AppResult<Vec<CommentView>> {
        let comments = self.comments.find_all_by_post(post_id).await?;

        Ok(comments
            .into_iter()
            .map(|entry| CommentView {
                author: entry.author,
                content: entry.comment.content,
                display_date: entry.comment.created_at.format(DATETIME_FORMAT).to_string(),
            })
            .collect())
    }
}
