//! Request handlers.
//!
//! Handlers are thin dispatchers: parse input, call exactly one service
//! operation, render exactly one view (or re-render the originating form
//! with the collected errors).

mod auth_handler;
mod home_handler;
mod language_handler;
mod post_handler;

pub use auth_handler::auth_routes;
pub use home_handler::home_routes;
pub use language_handler::language_routes;
pub use post_handler::post_routes;
