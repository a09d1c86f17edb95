//! Custom extractors.

mod session_context;

pub use session_context::{SessionContext, SessionUser};
