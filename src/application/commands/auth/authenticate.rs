// src/application/commands/auth/authenticate.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserRecord,
};
use tracing::debug;

const INVALID_CREDENTIALS: &str = "invalid credentials";

pub struct AuthenticateCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    pub async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self
            .users
            .find_by_email(command.email.trim())
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.verify_password(&user, &command.password).await?;
        Ok(AuthenticatedUser::new(user.email, user.role))
    }

    async fn verify_password(&self, user: &UserRecord, password: &str) -> ApplicationResult<()> {
        if user.has_hashed_password() {
            return self
                .hasher
                .verify(password, &user.password)
                .await
                .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS));
        }
        // Accounts created before hashing keep their plaintext password.
        debug!(user = %user.email, "verifying legacy plaintext password");
        if user.password == password {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized(INVALID_CREDENTIALS))
        }
    }
}
