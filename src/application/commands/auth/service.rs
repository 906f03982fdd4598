// src/application/commands/auth/service.rs
use std::sync::Arc;

use crate::{application::ports::security::PasswordHasher, domain::user::UserRepository};

pub struct AuthCommandService {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) hasher: Arc<dyn PasswordHasher>,
}

impl AuthCommandService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}
