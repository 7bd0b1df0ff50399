use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::{CommentId, EntityId, EntityType};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Durable comment storage. Every operation is atomic for a single row.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return the stored form.
    async fn insert(&self, comment: Comment) -> DomainResult<Comment>;

    async fn find_by_id(&self, id: &CommentId) -> DomainResult<Option<Comment>>;

    /// All comments attached to an entity, in creation order.
    async fn list_by_entity(
        &self,
        entity_type: &EntityType,
        entity_id: &EntityId,
    ) -> DomainResult<Vec<Comment>>;

    /// Overwrite text and `updated_at` of an existing comment.
    async fn update(&self, comment: Comment) -> DomainResult<Comment>;
}
