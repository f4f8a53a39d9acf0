use super::dto::{ToggleLikeRequest, ToggleLikeResponse};
use crate::domain::comment::{
    errors::DomainError, reaction::Reaction, repository::CommentRepository,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Reconciles a client-side like/dislike transition with the stored counter.
///
/// Nothing about the reader's previous stance is stored server side, so the
/// result is only as accurate as the `previous_action` the client sends.
pub struct ToggleLikeUseCase {
    repository: Arc<dyn CommentRepository>,
}

impl ToggleLikeUseCase {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(action = %request.action, previous = %request.previous_action))]
    pub async fn execute(
        &self,
        comment_id: i64,
        request: ToggleLikeRequest,
    ) -> Result<ToggleLikeResponse, DomainError> {
        let delta = Reaction::transition_delta(request.previous_action, request.action);
        debug!(delta, "Applying likes delta");

        let comment = self
            .repository
            .adjust_likes(comment_id, delta)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(comment_id))?;

        Ok(ToggleLikeResponse {
            likes: comment.likes,
            user_action: request.action,
            comment,
        })
    }
}
