use super::dto::{CommentListResponse, CreateCommentRequest, ListCommentsQuery, UpdateCommentRequest};
use crate::domain::comment::{
    entity::Comment, errors::DomainError, repository::CommentRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::{Validate, ValidationErrors};

/// Create, read, update and delete for board comments.
pub struct CommentsUseCase {
    repository: Arc<dyn CommentRepository>,
}

fn invalid(errors: ValidationErrors) -> DomainError {
    DomainError::ValidationError(errors.to_string())
}

impl CommentsUseCase {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: ListCommentsQuery) -> Result<CommentListResponse, DomainError> {
        let page = query.page();
        let results = self.repository.find_all(page).await?;
        let count = match page {
            Some(_) => self.repository.count().await?,
            None => results.len() as i64,
        };
        Ok(CommentListResponse::new(results, count, page))
    }

    #[instrument(skip(self, request), fields(author = %request.author))]
    pub async fn create(&self, request: CreateCommentRequest) -> Result<Comment, DomainError> {
        request.validate().map_err(invalid)?;
        let comment = self.repository.create(request.into()).await?;
        info!(comment_id = comment.id, "Created comment {}", comment);
        Ok(comment)
    }

    pub async fn get(&self, id: i64) -> Result<Comment, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))
    }

    /// Full update: `author` and `text` must be present.
    pub async fn replace(
        &self,
        id: i64,
        request: UpdateCommentRequest,
    ) -> Result<Comment, DomainError> {
        request.validate_replace().map_err(invalid)?;
        self.apply(id, request).await
    }

    pub async fn patch(
        &self,
        id: i64,
        request: UpdateCommentRequest,
    ) -> Result<Comment, DomainError> {
        request.validate().map_err(invalid)?;
        self.apply(id, request).await
    }

    async fn apply(&self, id: i64, request: UpdateCommentRequest) -> Result<Comment, DomainError> {
        let comment = self
            .repository
            .update(id, request.into())
            .await?
            .ok_or_else(|| DomainError::comment_not_found(id))?;
        info!(comment_id = id, "Updated comment");
        Ok(comment)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::comment_not_found(id));
        }
        info!(comment_id = id, "Deleted comment");
        Ok(())
    }
}
