//! Replace every stored comment with the contents of a JSON seed file.
//!
//! Usage:
//!     cargo run --bin load_comments -- [path/to/comments.json]
//!
//! Without an argument the path comes from `SEED_FILE` (default `comments.json`).
//! The file looks like `{"comments": [{"author", "text", "date", "likes", "image"}, ...]}`.

use comments_api::{
    application::seed_comments::use_case::SeedCommentsUseCase,
    config::Config,
    infrastructure::{
        database::pool::{create_pool, run_migrations},
        logging::{DEFAULT_LOG_FILTER, init_tracing},
        repositories::sqlx_comment_repository::SqlxCommentRepository,
    },
};
use std::{path::PathBuf, sync::Arc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(DEFAULT_LOG_FILTER);

    let config = Config::from_env()?;
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.seed_file));

    let file = SeedCommentsUseCase::read_file(&path).await?;

    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&db, config.ignore_missing_migrations).await?;

    let inserted = SeedCommentsUseCase::new(Arc::new(SqlxCommentRepository::new(db)))
        .execute(file)
        .await?;

    println!("Successfully loaded {} comments", inserted);
    Ok(())
}
