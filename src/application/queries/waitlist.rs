use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, WaitlistEntryDto},
        error::ApplicationResult,
    },
    domain::waitlist::{Waitlist, WaitlistRepository},
};

pub struct WaitlistQueryService {
    repo: Arc<dyn WaitlistRepository>,
}

impl WaitlistQueryService {
    pub fn new(repo: Arc<dyn WaitlistRepository>) -> Self {
        Self { repo }
    }

    /// The caller's entries still waiting for a release.
    pub async fn waiting_for(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<WaitlistEntryDto>> {
        let waitlist = Waitlist::new(self.repo.list().await?);
        Ok(waitlist
            .waiting_for(&actor.email)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
