//! Infrastructure layer - External systems integration
//!
//! Database connection management and the repository implementations
//! backing the credential and content stores.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    CommentRepository, CommentStore, PostRepository, PostStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCommentRepository, MockPostRepository, MockUserRepository};
