use super::BookingQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BookingHistoryDto},
        error::ApplicationResult,
    },
    domain::booking::HistoryLedger,
};

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

impl BookingQueryService {
    /// The caller's own booking history, newest first.
    pub async fn my_history(
        &self,
        actor: &AuthenticatedUser,
        limit: Option<usize>,
    ) -> ApplicationResult<Vec<BookingHistoryDto>> {
        let limit = match limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };
        let ledger = HistoryLedger::new(self.history.list().await?);
        Ok(ledger
            .for_user(&actor.email, limit)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
