// src/application/commands/auth/manage.rs
use super::{AuthCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, Role, UserRecord},
};
use tracing::info;

pub struct AddUserCommand {
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub struct DeleteUserCommand {
    pub email: String,
}

impl AuthCommandService {
    /// Registers an account with an Argon2-hashed password.
    pub async fn add_user(
        &self,
        actor: &AuthenticatedUser,
        command: AddUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "manage")?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.hasher.hash(&command.password).await?;
        let record = UserRecord {
            email: email.into(),
            password: hashed,
            role: command.role,
        };
        self.users.insert(record.clone()).await?;
        info!(actor = %actor.email, user = %record.email, role = %record.role, "user added");
        Ok(record.into())
    }

    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "users", "manage")?;
        if actor.email.eq_ignore_ascii_case(command.email.trim()) {
            return Err(ApplicationError::validation("cannot delete your own account"));
        }
        self.users.delete(command.email.trim()).await?;
        info!(actor = %actor.email, user = %command.email, "user deleted");
        Ok(())
    }
}
