// src/application/dto/auth.rs
use crate::domain::user::{Capability, Role, UserRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

/// The caller of an application operation, already verified.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

impl AuthenticatedUser {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
            capabilities: role.default_capabilities(),
        }
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub role: String,
    pub capabilities: Vec<String>,
}

impl From<&AuthenticatedUser> for UserDto {
    fn from(user: &AuthenticatedUser) -> Self {
        let mut capabilities: Vec<String> = user
            .capabilities
            .iter()
            .map(|c| format!("{}:{}", c.resource, c.action))
            .collect();
        capabilities.sort();
        Self {
            email: user.email.clone(),
            role: user.role.to_string(),
            capabilities,
        }
    }
}

impl From<UserRecord> for UserDto {
    fn from(user: UserRecord) -> Self {
        (&AuthenticatedUser::new(user.email, user.role)).into()
    }
}
