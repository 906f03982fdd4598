use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{AuditEventDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        audit::{AuditAction, AuditEntityType, AuditFilter},
        schedule::BookingKey,
    },
};
use std::collections::HashSet;

const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct AuditHistoryQuery {
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub actor: Option<String>,
    pub actor_contains: Option<String>,
    pub action: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct RoomDayHistoryQuery {
    pub room: String,
    pub day: String,
    pub actor_contains: Option<String>,
    pub action: Option<String>,
    pub limit: Option<usize>,
}

impl AuditQueryService {
    pub async fn history(
        &self,
        actor: &AuthenticatedUser,
        query: AuditHistoryQuery,
    ) -> ApplicationResult<Vec<AuditEventDto>> {
        common::ensure_audit_capability(actor)?;
        let filter = AuditFilter {
            entity_type: query
                .entity_type
                .as_deref()
                .map(parse_entity_type)
                .transpose()?,
            entity_id: query.entity_id,
            actor: query.actor,
            actor_contains: query.actor_contains,
            action: query.action.as_deref().map(parse_action).transpose()?,
            limit: Some(common::normalize_limit(query.limit, DEFAULT_LIMIT)),
        };
        self.select(&filter).await
    }

    /// Events of one booking triple, newest first.
    pub async fn booking_history(
        &self,
        actor: &AuthenticatedUser,
        key: &BookingKey,
        limit: Option<usize>,
    ) -> ApplicationResult<Vec<AuditEventDto>> {
        common::ensure_audit_capability(actor)?;
        let filter = AuditFilter::for_entity(AuditEntityType::RoomBooking, key.entity_id())
            .with_limit(common::normalize_limit(limit, DEFAULT_LIMIT));
        self.select(&filter).await
    }

    /// Events across every slot of one room on one day.
    pub async fn room_day_history(
        &self,
        actor: &AuthenticatedUser,
        query: RoomDayHistoryQuery,
    ) -> ApplicationResult<Vec<AuditEventDto>> {
        common::ensure_audit_capability(actor)?;
        let rooms = self.rooms.load().await?;
        let slots = rooms.slot_labels(&query.room, &query.day);
        if slots.is_empty() {
            return Err(ApplicationError::not_found(format!(
                "no timetable for {} on {}",
                query.room, query.day
            )));
        }
        let ids: HashSet<String> = slots
            .into_iter()
            .map(|slot| {
                BookingKey {
                    room: query.room.clone(),
                    day: query.day.clone(),
                    slot,
                }
                .entity_id()
            })
            .collect();

        let filter = AuditFilter {
            entity_type: Some(AuditEntityType::RoomBooking),
            actor_contains: query.actor_contains,
            action: query.action.as_deref().map(parse_action).transpose()?,
            ..AuditFilter::default()
        };
        let limit = common::normalize_limit(query.limit, common::ROOM_DAY_DEFAULT_LIMIT);
        let events = filter
            .apply(self.repo.list().await?)
            .into_iter()
            .filter(|e| ids.contains(&e.entity_id))
            .take(limit)
            .map(Into::into)
            .collect();
        Ok(events)
    }

    async fn select(&self, filter: &AuditFilter) -> ApplicationResult<Vec<AuditEventDto>> {
        let events = filter.apply(self.repo.list().await?);
        Ok(events.into_iter().map(Into::into).collect())
    }
}

fn parse_action(value: &str) -> ApplicationResult<AuditAction> {
    AuditAction::parse(value)
        .ok_or_else(|| ApplicationError::validation(format!("unknown audit action '{value}'")))
}

fn parse_entity_type(value: &str) -> ApplicationResult<AuditEntityType> {
    AuditEntityType::parse(value)
        .ok_or_else(|| ApplicationError::validation(format!("unknown entity type '{value}'")))
}
