use crate::{config::Config, domain::comment::repository::CommentRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub comment_repo: Arc<dyn CommentRepository>,
}
