use crate::application::comments::{datetime::iso_datetime, dto::CreateCommentRequest};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Layout of the seed file: `{"comments": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub comments: Vec<SeedComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub author: String,
    pub text: String,
    #[serde(deserialize_with = "iso_datetime")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub likes: i32,
    #[serde(default)]
    pub image: Option<String>,
}

impl From<SeedComment> for CreateCommentRequest {
    fn from(s: SeedComment) -> Self {
        CreateCommentRequest {
            author: s.author,
            text: s.text,
            date: Some(s.date),
            likes: Some(s.likes),
            image: s.image,
        }
    }
}
