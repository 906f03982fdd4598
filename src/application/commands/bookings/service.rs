// src/application/commands/bookings/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::waitlist::WaitlistCommandService,
        error::ApplicationResult,
        ports::{notifier::Notifier, time::LocalClock},
    },
    domain::{
        audit::AuditLogRepository,
        booking::BookingHistoryRepository,
        faculty::FacultyIdentityRepository,
        schedule::{BookingKey, DaySelector, SaturdayPolicy, ScheduleRepository},
        settings::SettingsRepository,
    },
};

/// The only component that moves a slot between free and occupied.
pub struct BookingCommandService {
    pub(super) rooms: Arc<dyn ScheduleRepository>,
    pub(super) faculty: Arc<dyn ScheduleRepository>,
    pub(super) identities: Arc<dyn FacultyIdentityRepository>,
    pub(super) audit: Arc<dyn AuditLogRepository>,
    pub(super) history: Arc<dyn BookingHistoryRepository>,
    pub(super) settings: Arc<dyn SettingsRepository>,
    pub(super) waitlist: Arc<WaitlistCommandService>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) clock: LocalClock,
}

impl BookingCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rooms: Arc<dyn ScheduleRepository>,
        faculty: Arc<dyn ScheduleRepository>,
        identities: Arc<dyn FacultyIdentityRepository>,
        audit: Arc<dyn AuditLogRepository>,
        history: Arc<dyn BookingHistoryRepository>,
        settings: Arc<dyn SettingsRepository>,
        waitlist: Arc<WaitlistCommandService>,
        notifier: Arc<dyn Notifier>,
        clock: LocalClock,
    ) -> Self {
        Self {
            rooms,
            faculty,
            identities,
            audit,
            history,
            settings,
            waitlist,
            notifier,
            clock,
        }
    }

    pub(super) async fn saturday_policy(&self) -> ApplicationResult<SaturdayPolicy> {
        Ok(self.settings.load().await?.saturday_policy())
    }

    pub(super) async fn resolve_key(
        &self,
        room: String,
        day: &DaySelector,
        slot: String,
    ) -> ApplicationResult<BookingKey> {
        let policy = self.saturday_policy().await?;
        let day = day.resolve(&policy)?;
        Ok(BookingKey::new(room, day, slot)?)
    }
}

/// What notifications call the date: the calendar date when one was given,
/// the day label otherwise.
pub(super) fn date_text(day: &DaySelector, key: &BookingKey) -> String {
    match day {
        DaySelector::Date(_) => day.to_string(),
        DaySelector::Label(_) => key.day.clone(),
    }
}
