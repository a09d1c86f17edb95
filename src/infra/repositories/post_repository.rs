//! Post repository implementation with author joins.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::post::{self, ActiveModel, Entity as PostEntity};
use super::entities::user::Entity as UserEntity;
use crate::domain::{Post, PostWithAuthor};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post repository trait for dependency injection.
///
/// Read operations join the author's username; listings are newest-first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post
    async fn create(
        &self,
        user_id: i64,
        title: String,
        content: String,
        image_url: Option<String>,
    ) -> AppResult<Post>;

    /// List all posts, author-joined, newest-first
    async fn find_all(&self) -> AppResult<Vec<PostWithAuthor>>;

    /// Find a post by ID, author-joined
    async fn find_by_id(&self, id: i64) -> AppResult<Option<PostWithAuthor>>;
}

/// Concrete implementation of PostRepository
pub struct PostStore {
    db: DatabaseConnection,
}

impl PostStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn with_author((post, author): (post::Model, Option<super::entities::user::Model>)) -> PostWithAuthor {
    PostWithAuthor {
        post: Post::from(post),
        author: author.map(|u| u.username).unwrap_or_default(),
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn create(
        &self,
        user_id: i64,
        title: String,
        content: String,
        image_url: Option<String>,
    ) -> AppResult<Post> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            title: Set(title),
            content: Set(content),
            image_url: Set(image_url),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Post::from(model))
    }

    async fn find_all(&self) -> AppResult<Vec<PostWithAuthor>> {
        let rows = PostEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(with_author).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<PostWithAuthor>> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(with_author))
    }
}
