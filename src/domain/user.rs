//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity
///
/// Users are immutable after registration; there is no profile editing
/// or account deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
