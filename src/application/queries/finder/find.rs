use super::{FinderQueryService, matching};
use crate::{
    application::{
        audit_trail,
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, FinderResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditEvent},
        schedule::{DaySelector, slot_time},
    },
};
use serde_json::json;

pub struct FindFreeRoomsQuery {
    pub day: DaySelector,
    pub slots: Vec<String>,
}

impl FinderQueryService {
    /// Rooms free for all requested slots, plus rooms free for some of them.
    /// Every search is recorded in the audit log.
    pub async fn find_free(
        &self,
        actor: &AuthenticatedUser,
        query: FindFreeRoomsQuery,
    ) -> ApplicationResult<FinderResultDto> {
        ensure_capability(actor, "finder", "search")?;
        let slots = matching::normalize_slots(query.slots);
        if slots.is_empty() {
            return Err(ApplicationError::validation("select at least one slot"));
        }
        let day = self.resolve_day(&query.day).await?;

        let rooms = self.rooms.load().await?;
        let (matches, partial) = matching::match_rooms(&rooms, &day, &slots);

        audit_trail::append_event(
            self.audit.as_ref(),
            AuditEvent::new(
                self.clock.utc(),
                actor.email.clone(),
                AuditAction::Search,
                AuditEntityType::FreeRooms,
                format!("{day}|{}", slots.join(",")),
                json!({ "slots_count": slots.len() }),
            ),
        )
        .await;

        Ok(FinderResultDto {
            day,
            matches,
            partial,
        })
    }

    /// Slot labels offered on `day`, taken from the first room that has a
    /// timetable for it.
    pub async fn slot_catalogue(
        &self,
        actor: &AuthenticatedUser,
        day: DaySelector,
    ) -> ApplicationResult<Vec<String>> {
        ensure_capability(actor, "schedules", "read")?;
        let day = self.resolve_day(&day).await?;
        let rooms = self.rooms.load().await?;
        let mut labels = rooms
            .names()
            .map(|room| rooms.slot_labels(room, &day))
            .find(|labels| !labels.is_empty())
            .unwrap_or_default();
        labels.sort_by_key(|s| slot_time::sort_key(s));
        Ok(labels)
    }
}
