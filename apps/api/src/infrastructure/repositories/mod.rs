pub mod sqlx_comment_repository;
