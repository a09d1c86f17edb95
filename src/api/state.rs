//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{CommentStore, Database, PostStore, UserStore};
use crate::services::{
    AuthService, Authenticator, CommentManager, CommentService, PostManager, PostService,
};
use crate::upload::UploadPipeline;

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Comment service
    pub comment_service: Arc<dyn CommentService>,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state from a database connection and config.
    ///
    /// Wires repositories into services; every service receives its own
    /// handle on the shared connection pool.
    pub fn from_config(database: &Database, config: Config) -> Self {
        let db = database.get_connection();

        let users = Arc::new(UserStore::new(db.clone()));
        let posts = Arc::new(PostStore::new(db.clone()));
        let comments = Arc::new(CommentStore::new(db));

        let pipeline = UploadPipeline::new(config.upload_dir.clone());

        Self {
            auth_service: Arc::new(Authenticator::new(users)),
            post_service: Arc::new(PostManager::new(posts, pipeline)),
            comment_service: Arc::new(CommentManager::new(comments)),
            config,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        post_service: Arc<dyn PostService>,
        comment_service: Arc<dyn CommentService>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            post_service,
            comment_service,
            config,
        }
    }
}
