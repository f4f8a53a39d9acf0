use super::entity::{Comment, CommentChanges, NewComment};
use super::errors::DomainError;
use crate::domain::shared::pagination::PaginationRequest;
use async_trait::async_trait;

/// Durable storage for comments.
///
/// Missing rows are reported as `Ok(None)` / `Ok(false)`; callers decide
/// whether that is a `DomainError::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: NewComment) -> Result<Comment, DomainError>;
    /// Newest first (`date` descending, then `id` descending).
    async fn find_all(&self, page: Option<PaginationRequest>)
    -> Result<Vec<Comment>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    async fn update(
        &self,
        id: i64,
        changes: CommentChanges,
    ) -> Result<Option<Comment>, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
    /// Adds `delta` to the stored counter atomically.
    async fn adjust_likes(&self, id: i64, delta: i32) -> Result<Option<Comment>, DomainError>;
    /// Drops every stored comment and inserts `comments` in one transaction.
    async fn replace_all(&self, comments: Vec<NewComment>) -> Result<u64, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
