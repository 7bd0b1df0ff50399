// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    AuthorId, Comment, CommentId, CommentRepository, CommentText, EntityId, EntityType,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: String,
    entity_type: String,
    entity_id: String,
    author_id: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            entity_type: EntityType::new(row.entity_type)?,
            entity_id: EntityId::new(row.entity_id)?,
            author_id: AuthorId::new(row.author_id)?,
            text: CommentText::new(row.text)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: Comment) -> DomainResult<Comment> {
        let Comment {
            id,
            entity_type,
            entity_id,
            author_id,
            text,
            created_at,
            updated_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (id, entity_type, entity_id, author_id, text, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, entity_type, entity_id, author_id, text, created_at, updated_at",
        )
        .bind(id.as_str())
        .bind(entity_type.as_str())
        .bind(entity_id.as_str())
        .bind(author_id.as_str())
        .bind(text.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: &CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, entity_type, entity_id, author_id, text, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_entity(
        &self,
        entity_type: &EntityType,
        entity_id: &EntityId,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, entity_type, entity_id, author_id, text, created_at, updated_at
             FROM comments
             WHERE entity_type = $1 AND entity_id = $2
             ORDER BY created_at ASC, id ASC",
        )
        .bind(entity_type.as_str())
        .bind(entity_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn update(&self, comment: Comment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET text = $1, updated_at = $2
             WHERE id = $3
             RETURNING id, entity_type, entity_id, author_id, text, created_at, updated_at",
        )
        .bind(comment.text.as_str())
        .bind(comment.updated_at)
        .bind(comment.id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Comment::try_from(row),
            None => Err(DomainError::NotFound(format!(
                "comment {} not found",
                comment.id
            ))),
        }
    }
}
