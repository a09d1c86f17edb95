//! Comment repository implementation with author joins.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use super::entities::user::Entity as UserEntity;
use crate::domain::{Comment, CommentWithAuthor};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment
    async fn create(&self, post_id: i64, user_id: i64, content: String) -> AppResult<Comment>;

    /// List all comments of a post, author-joined, newest-first
    async fn find_all_by_post(&self, post_id: i64) -> AppResult<Vec<CommentWithAuthor>>;
}

/// Concrete implementation of CommentRepository
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn create(&self, post_id: i64, user_id: i64, content: String) -> AppResult<Comment> {
        let active_model = ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
            content: Set(content),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Comment::from(model))
    }

    async fn find_all_by_post(&self, post_id: i64) -> AppResult<Vec<CommentWithAuthor>> {
        let rows = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .find_also_related(UserEntity)
            .order_by_desc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(c, author)| CommentWithAuthor {
                comment: Comment::from(c),
                author: author.map(|u| u.username).unwrap_or_default(),
            })
            .collect())
    }
}
