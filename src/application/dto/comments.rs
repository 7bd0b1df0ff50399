use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub author_id: String,
    pub text: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            entity_type: comment.entity_type.into_inner(),
            entity_id: comment.entity_id.into_inner(),
            author_id: comment.author_id.into_inner(),
            text: comment.text.into_inner(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
