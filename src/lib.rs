//! miniblog - A small multi-user blog.
//!
//! Visitors register, log in, publish posts (optionally with an image)
//! and comment on posts. Pages are rendered server-side and localized.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **i18n**: Language codes and translation tables
//! - **services**: Application use cases and business logic
//! - **upload**: Image upload validation and storage
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, session context, and routes
//! - **views**: Server-side page rendering
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod infra;
pub mod services;
pub mod upload;
pub mod views;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use i18n::Lang;
