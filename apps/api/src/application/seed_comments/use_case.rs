use super::dto::SeedFile;
use crate::application::comments::dto::CreateCommentRequest;
use crate::domain::comment::{
    entity::NewComment, errors::DomainError, repository::CommentRepository,
};
use anyhow::Context;
use std::{path::Path, sync::Arc};
use tracing::{info, instrument};
use validator::Validate;

/// Replaces the whole board with the contents of a seed file.
pub struct SeedCommentsUseCase {
    repository: Arc<dyn CommentRepository>,
}

impl SeedCommentsUseCase {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn read_file(path: &Path) -> anyhow::Result<SeedFile> {
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        serde_json::from_slice(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))
    }

    /// Every entry is validated before anything is deleted.
    #[instrument(skip(self, file), fields(entries = file.comments.len()))]
    pub async fn execute(&self, file: SeedFile) -> Result<u64, DomainError> {
        let comments = file
            .comments
            .into_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<NewComment, DomainError> {
                let request = CreateCommentRequest::from(entry);
                request.validate().map_err(|e| {
                    DomainError::ValidationError(format!("comments[{}]: {}", index, e))
                })?;
                Ok(NewComment::from(request))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let inserted = self.repository.replace_all(comments).await?;
        info!(inserted, "Seeded comments");
        Ok(inserted)
    }
}
