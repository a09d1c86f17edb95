//! Post domain entity and view types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PREVIEW_LENGTH;

/// Post domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    /// Relative path to the uploaded image, e.g. `uploads/<token>.png`
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Post joined with its author's username
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: String,
}

/// Listing entry prepared for display.
///
/// `display_date` and `preview` are recomputed on every read and never
/// persisted.
#[derive(Debug, Clone)]
pub struct PostListItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub image_url: Option<String>,
    pub display_date: String,
    pub preview: String,
}

/// Detail view of a single post, prepared for display
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub display_date: String,
}

/// Cut `content` down to a listing preview.
///
/// Counts displayed characters, not bytes; the ellipsis is appended only
/// when something was actually cut off.
pub fn preview(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_content_unchanged() {
        assert_eq!(preview("World"), "World");
    }

    #[test]
    fn test_preview_exactly_limit_no_ellipsis() {
        let content = "a".repeat(PREVIEW_LENGTH);
        assert_eq!(preview(&content), content);
    }

    #[test]
    fn test_preview_truncates_and_appends_ellipsis() {
        let content = "b".repeat(250);
        let result = preview(&content);
        assert_eq!(result, format!("{}...", "b".repeat(PREVIEW_LENGTH)));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        // 250 two-byte characters; the cut must land after 200 characters
        let content = "ä".repeat(250);
        let result = preview(&content);
        assert_eq!(result.chars().count(), PREVIEW_LENGTH + 3);
        assert!(result.ends_with("..."));
    }
}
