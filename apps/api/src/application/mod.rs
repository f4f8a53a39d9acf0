pub mod comments;
pub mod seed_comments;
pub mod toggle_like;
