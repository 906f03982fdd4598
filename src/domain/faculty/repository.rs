// src/domain/faculty/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::faculty::identity::FacultyIdentities;
use async_trait::async_trait;

#[async_trait]
pub trait FacultyIdentityRepository: Send + Sync {
    async fn load(&self) -> DomainResult<FacultyIdentities>;
}
