use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Number of characters of `text` shown in a comment's display form.
const PREVIEW_CHARS: usize = 50;

/// A single comment posted on the board.
///
/// # Invariants
/// - `id` is assigned by the store and never reused
/// - `author` is non-blank and at most 100 characters
/// - `image`, when present, is a URL of at most 500 characters
/// - `likes` has no floor and may go negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Comment {
    #[ts(type = "number")]
    pub id: i64,
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub likes: i32,
    pub image: Option<String>,
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.text.chars().take(PREVIEW_CHARS).collect();
        write!(f, "{}: {}...", self.author, preview)
    }
}

/// A comment that has not been stored yet. Defaults are already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub likes: i32,
    pub image: Option<String>,
}

impl NewComment {
    pub fn new(
        author: String,
        text: String,
        date: Option<DateTime<Utc>>,
        likes: Option<i32>,
        image: Option<String>,
    ) -> Self {
        Self {
            author: author.trim().to_string(),
            text,
            date: date.unwrap_or_else(Utc::now),
            likes: likes.unwrap_or(0),
            image: normalize_image(image),
        }
    }
}

/// Field changes for an existing comment. `None` leaves a field untouched.
///
/// `image` is tri-state: `Some(None)` clears the stored URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentChanges {
    pub author: Option<String>,
    pub text: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub likes: Option<i32>,
    pub image: Option<Option<String>>,
}

impl CommentChanges {
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.text.is_none()
            && self.date.is_none()
            && self.likes.is_none()
            && self.image.is_none()
    }

    pub fn apply_to(self, comment: &mut Comment) {
        if let Some(author) = self.author {
            comment.author = author.trim().to_string();
        }
        if let Some(text) = self.text {
            comment.text = text;
        }
        if let Some(date) = self.date {
            comment.date = date;
        }
        if let Some(likes) = self.likes {
            comment.likes = likes;
        }
        if let Some(image) = self.image {
            comment.image = normalize_image(image);
        }
    }
}

/// Blank image URLs are stored as null.
pub fn normalize_image(image: Option<String>) -> Option<String> {
    image
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
