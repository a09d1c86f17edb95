//! Comment domain entity and view types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author's username
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: String,
}

/// Comment prepared for display
#[derive(Debug, Clone)]
pub struct CommentView {
    pub author: String,
    pub content: String,
    pub display_date: String,
}
