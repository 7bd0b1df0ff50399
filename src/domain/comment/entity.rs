// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{AuthorId, CommentId, CommentText, EntityId, EntityType};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub entity_type: EntityType,
    pub entity_id: EntityId,
    pub author_id: AuthorId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Build a brand-new comment. Both timestamps are set to `now`.
    pub fn create(
        id: CommentId,
        entity_type: EntityType,
        entity_id: EntityId,
        author_id: AuthorId,
        text: CommentText,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            entity_type,
            entity_id,
            author_id,
            text,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the text and move `updated_at` strictly forward.
    ///
    /// A clock that has not advanced past the previous `updated_at` still
    /// yields a later timestamp, one microsecond (the storage precision) after it.
    pub fn replace_text(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> DomainResult<()> {
        let text = CommentText::new(text)?;
        let floor = self.updated_at + Duration::microseconds(1);
        self.text = text;
        self.updated_at = now.max(floor);
        Ok(())
    }

    /// `(entity_type, entity_id)` key this comment is attached to.
    pub fn entity_key(&self) -> String {
        format!("{}:{}", self.entity_type, self.entity_id)
    }
}
