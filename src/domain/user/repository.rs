use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, UserId},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Users ordered by id.
    async fn list(&self, limit: u32, offset: u64) -> DomainResult<Vec<User>>;

    /// Apply the present fields and refresh `updated_at`. Returns `None` when
    /// the user does not exist.
    async fn update(&self, update: UserUpdate) -> DomainResult<Option<User>>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: UserId) -> DomainResult<bool>;
}
