use super::datetime::optional_iso_datetime;
use super::validation::{check, not_blank, valid_author, valid_image_url};
use crate::domain::{
    comment::entity::{Comment, CommentChanges, NewComment},
    shared::pagination::PaginationRequest,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationErrors};

pub const COMMENTS_PATH: &str = "/comments/";

#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "valid_author"))]
    pub author: String,
    #[validate(custom(function = "not_blank"))]
    pub text: String,
    #[serde(default, deserialize_with = "optional_iso_datetime")]
    #[ts(optional)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[ts(optional)]
    pub likes: Option<i32>,
    #[serde(default)]
    #[ts(optional)]
    #[validate(custom(function = "valid_image_url"))]
    pub image: Option<String>,
}

impl From<CreateCommentRequest> for NewComment {
    fn from(r: CreateCommentRequest) -> Self {
        NewComment::new(r.author, r.text, r.date, r.likes, r.image)
    }
}

/// Body of both PUT and PATCH. Every field is optional here; PUT
/// additionally requires `author` and `text` (see [`Self::validate_replace`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "optional_iso_datetime")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Validate for UpdateCommentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(author) = &self.author {
            check(&mut errors, "author", valid_author(author));
        }
        if let Some(text) = &self.text {
            check(&mut errors, "text", not_blank(text));
        }
        if let Some(Some(image)) = &self.image {
            check(&mut errors, "image", valid_image_url(image));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl UpdateCommentRequest {
    pub fn validate_replace(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        let required = || {
            validator::ValidationError::new("required")
                .with_message("This field is required.".into())
        };
        if self.author.is_none() {
            errors.add("author", required());
        }
        if self.text.is_none() {
            errors.add("text", required());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<UpdateCommentRequest> for CommentChanges {
    fn from(r: UpdateCommentRequest) -> Self {
        CommentChanges {
            author: r.author,
            text: r.text,
            date: r.date,
            likes: r.likes,
            image: r.image,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCommentsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListCommentsQuery {
    /// `None` means the whole collection.
    pub fn page(&self) -> Option<PaginationRequest> {
        self.limit
            .map(|limit| PaginationRequest::new(limit, self.offset.unwrap_or(0)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommentListResponse {
    #[ts(type = "number")]
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Comment>,
}

impl CommentListResponse {
    pub fn new(results: Vec<Comment>, count: i64, page: Option<PaginationRequest>) -> Self {
        let link = |p: PaginationRequest| {
            format!("{}?limit={}&offset={}", COMMENTS_PATH, p.limit, p.offset)
        };
        Self {
            count,
            next: page.and_then(|p| p.next(count)).map(link),
            previous: page.and_then(|p| p.previous()).map(link),
            results,
        }
    }
}
