// src/domain/user/entity.rs
use crate::domain::user::value_objects::Role;
use serde::{Deserialize, Serialize};

const ARGON2_PREFIX: &str = "$argon2";

/// A row of `users.json`. `password` holds either an Argon2 PHC string or,
/// for accounts created before hashing was introduced, the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserRecord {
    pub fn has_hashed_password(&self) -> bool {
        self.password.starts_with(ARGON2_PREFIX)
    }

    pub fn is(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
