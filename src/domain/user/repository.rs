// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::UserRecord;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<UserRecord>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserRecord>>;

    /// Fails with `Conflict` when the email is already registered.
    async fn insert(&self, user: UserRecord) -> DomainResult<()>;

    async fn delete(&self, email: &str) -> DomainResult<()>;

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.list().await?.len())
    }
}
