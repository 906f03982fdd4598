use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AdminOverviewDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        audit::{AuditFilter, AuditLogRepository},
        media::MediaRepository,
        schedule::ScheduleRepository,
        user::UserRepository,
    },
};

const RECENT_EVENTS: usize = 10;

pub struct AdminQueryService {
    rooms: Arc<dyn ScheduleRepository>,
    faculty: Arc<dyn ScheduleRepository>,
    users: Arc<dyn UserRepository>,
    audit: Arc<dyn AuditLogRepository>,
    media: Arc<dyn MediaRepository>,
}

impl AdminQueryService {
    pub fn new(
        rooms: Arc<dyn ScheduleRepository>,
        faculty: Arc<dyn ScheduleRepository>,
        users: Arc<dyn UserRepository>,
        audit: Arc<dyn AuditLogRepository>,
        media: Arc<dyn MediaRepository>,
    ) -> Self {
        Self {
            rooms,
            faculty,
            users,
            audit,
            media,
        }
    }

    pub async fn overview(&self, actor: &AuthenticatedUser) -> ApplicationResult<AdminOverviewDto> {
        ensure_capability(actor, "admin", "read")?;
        let events = self.audit.list().await?;
        let audit_events = events.len();
        let recent_events = AuditFilter::default()
            .with_limit(RECENT_EVENTS)
            .apply(events)
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(AdminOverviewDto {
            rooms: self.rooms.load().await?.len(),
            faculty: self.faculty.load().await?.len(),
            users: self.users.count().await?,
            audit_events,
            pending_media: self.media.load().await?.pending_approval.len(),
            recent_events,
        })
    }
}
