//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository abstractions for
//! dependency inversion and hold no state of their own; every operation
//! re-reads from the store.

mod auth_service;
mod comment_service;
mod post_service;

pub use auth_service::{AuthService, Authenticator};
pub use comment_service::{CommentManager, CommentService};
pub use post_service::{PostManager, PostService};
