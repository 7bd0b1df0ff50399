// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::Utc;
use commentary_core::domain::comment::{Comment, CommentId, CommentRepository, EntityId, EntityType};
use commentary_core::domain::errors::{DomainError, DomainResult};
use commentary_core::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// User store backed by an ordered map; ids are issued from 1.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<(i64, BTreeMap<i64, User>)>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut guard = self.inner.lock().unwrap();
        if guard.1.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }
        guard.0 += 1;
        let now = Utc::now();
        let user = User {
            id: UserId(guard.0),
            email: new_user.email,
            name: new_user.name,
            created_at: now,
            updated_at: now,
        };
        guard.1.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().1.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard.1.values().find(|u| &u.email == email).cloned())
    }

    async fn list(&self, limit: u32, offset: u64) -> DomainResult<Vec<User>> {
        let guard = self.inner.lock().unwrap();
        Ok(guard
            .1
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<Option<User>> {
        let mut guard = self.inner.lock().unwrap();
        let Some(user) = guard.1.get_mut(&update.id.0) else {
            return Ok(None);
        };
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().1.remove(&id.0).is_some())
    }
}

/// Every call fails as if the database were down.
pub struct FailingCommentRepo;

fn down() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl CommentRepository for FailingCommentRepo {
    async fn insert(&self, _comment: Comment) -> DomainResult<Comment> {
        Err(down())
    }

    async fn find_by_id(&self, _id: &CommentId) -> DomainResult<Option<Comment>> {
        Err(down())
    }

    async fn list_by_entity(
        &self,
        _entity_type: &EntityType,
        _entity_id: &EntityId,
    ) -> DomainResult<Vec<Comment>> {
        Err(down())
    }

    async fn update(&self, _comment: Comment) -> DomainResult<Comment> {
        Err(down())
    }
}
