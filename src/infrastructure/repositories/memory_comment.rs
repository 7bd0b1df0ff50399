// src/infrastructure/repositories/memory_comment.rs
use crate::domain::comment::{Comment, CommentId, CommentRepository, EntityId, EntityType};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local comment store. Each instance is independent; nothing is
/// shared between instances.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: HashMap<CommentId, Comment>,
    // Insertion order, used as creation order for entity listings.
    order: Vec<CommentId>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.rows.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    DomainError::Persistence("in-memory comment store lock poisoned".into())
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: Comment) -> DomainResult<Comment> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        if inner.rows.contains_key(&comment.id) {
            return Err(DomainError::Conflict("comment id already exists".into()));
        }
        inner.order.push(comment.id.clone());
        inner.rows.insert(comment.id.clone(), comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> DomainResult<Option<Comment>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.rows.get(id).cloned())
    }

    async fn list_by_entity(
        &self,
        entity_type: &EntityType,
        entity_id: &EntityId,
    ) -> DomainResult<Vec<Comment>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.rows.get(id))
            .filter(|c| &c.entity_type == entity_type && &c.entity_id == entity_id)
            .cloned()
            .collect())
    }

    async fn update(&self, comment: Comment) -> DomainResult<Comment> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let stored = inner
            .rows
            .get_mut(&comment.id)
            .ok_or_else(|| DomainError::NotFound(format!("comment {} not found", comment.id)))?;

        stored.text = comment.text;
        stored.updated_at = comment.updated_at;
        Ok(stored.clone())
    }
}
