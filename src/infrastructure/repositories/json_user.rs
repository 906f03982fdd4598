// src/infrastructure/repositories/json_user.rs
use super::USERS_FILE;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserRecord, UserRepository};
use crate::infrastructure::json_store::JsonStore;
use async_trait::async_trait;
use std::sync::Arc;

pub struct JsonUserRepository {
    store: Arc<JsonStore>,
}

impl JsonUserRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn list(&self) -> DomainResult<Vec<UserRecord>> {
        self.store.read(USERS_FILE).await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserRecord>> {
        Ok(self.list().await?.into_iter().find(|u| u.is(email)))
    }

    async fn insert(&self, user: UserRecord) -> DomainResult<()> {
        self.store
            .update(USERS_FILE, move |users: &mut Vec<UserRecord>| {
                if users.iter().any(|u| u.is(&user.email)) {
                    return Err(DomainError::Conflict(format!(
                        "user '{}' already exists",
                        user.email
                    )));
                }
                users.push(user);
                Ok(())
            })
            .await
    }

    async fn delete(&self, email: &str) -> DomainResult<()> {
        self.store
            .update(USERS_FILE, |users: &mut Vec<UserRecord>| {
                let before = users.len();
                users.retain(|u| !u.is(email));
                if users.len() == before {
                    return Err(DomainError::NotFound(format!("user '{email}'")));
                }
                Ok(())
            })
            .await
    }
}
