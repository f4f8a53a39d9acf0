use crate::domain::{
    comment::{
        entity::{Comment, CommentChanges, NewComment},
        errors::DomainError,
        repository::CommentRepository,
    },
    shared::pagination::PaginationRequest,
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, info, instrument};

const COMMENT_COLUMNS: &str = "id, author, text, date, likes, image";

/// Rows per multi-row INSERT when seeding; keeps bind parameters well under the Postgres limit.
const INSERT_BATCH: usize = 1000;

fn infra(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| {
        error!("{}: {}", context, e);
        DomainError::InfrastructureError(format!("{}: {}", context, e))
    }
}

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCommentRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    #[instrument(skip(self, c), fields(author = %c.author))]
    async fn create(&self, c: NewComment) -> Result<Comment, DomainError> {
        let comment = sqlx::query_as::<_, Comment>(&format!(
            "INSERT INTO comments (author, text, date, likes, image)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(&c.author)
        .bind(&c.text)
        .bind(c.date)
        .bind(c.likes)
        .bind(&c.image)
        .fetch_one(&self.pool)
        .await
        .map_err(infra("Failed to create comment"))?;

        debug!(comment_id = comment.id, "Inserted comment");
        Ok(comment)
    }

    /// Newest first. Equal timestamps fall back to insertion order, newest first.
    #[instrument(skip(self))]
    async fn find_all(
        &self,
        page: Option<PaginationRequest>,
    ) -> Result<Vec<Comment>, DomainError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {COMMENT_COLUMNS} FROM comments ORDER BY date DESC, id DESC"
        ));
        if let Some(page) = page {
            query
                .push(" LIMIT ")
                .push_bind(page.limit)
                .push(" OFFSET ")
                .push_bind(page.offset);
        }

        let rows = query
            .build_query_as::<Comment>()
            .fetch_all(&self.pool)
            .await
            .map_err(infra("Failed to list comments"))?;

        debug!("Retrieved {} comments", rows.len());
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await
            .map_err(infra("Failed to count comments"))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra("Failed to fetch comment"))
    }

    /// Read-modify-write under a row lock so concurrent edits serialize.
    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: i64,
        changes: CommentChanges,
    ) -> Result<Option<Comment>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(infra("Failed to begin transaction"))?;

        let Some(mut comment) = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(infra("Failed to lock comment"))?
        else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(comment));
        }
        changes.apply_to(&mut comment);

        let updated = sqlx::query_as::<_, Comment>(&format!(
            "UPDATE comments
             SET author = $2, text = $3, date = $4, likes = $5, image = $6
             WHERE id = $1
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(&comment.author)
        .bind(&comment.text)
        .bind(comment.date)
        .bind(comment.likes)
        .bind(&comment.image)
        .fetch_one(&mut *tx)
        .await
        .map_err(infra("Failed to update comment"))?;

        tx.commit()
            .await
            .map_err(infra("Failed to commit comment update"))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra("Failed to delete comment"))?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn adjust_likes(&self, id: i64, delta: i32) -> Result<Option<Comment>, DomainError> {
        sqlx::query_as::<_, Comment>(&format!(
            "UPDATE comments SET likes = likes + $2 WHERE id = $1 RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra("Failed to adjust likes"))
    }

    #[instrument(skip(self, comments), fields(count = comments.len()))]
    async fn replace_all(&self, comments: Vec<NewComment>) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(infra("Failed to begin transaction"))?;

        let removed = sqlx::query("DELETE FROM comments")
            .execute(&mut *tx)
            .await
            .map_err(infra("Failed to clear comments"))?
            .rows_affected();
        debug!(removed, "Cleared existing comments");

        let mut inserted = 0;
        for batch in comments.chunks(INSERT_BATCH) {
            let mut query: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO comments (author, text, date, likes, image) ");
            query.push_values(batch, |mut row, c| {
                row.push_bind(&c.author)
                    .push_bind(&c.text)
                    .push_bind(c.date)
                    .push_bind(c.likes)
                    .push_bind(&c.image);
            });
            inserted += query
                .build()
                .execute(&mut *tx)
                .await
                .map_err(infra("Failed to insert comments"))?
                .rows_affected();
        }

        tx.commit()
            .await
            .map_err(infra("Failed to commit comment import"))?;
        info!(inserted, removed, "Replaced comments");
        Ok(inserted)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(infra("Database unreachable"))?;
        Ok(())
    }
}
