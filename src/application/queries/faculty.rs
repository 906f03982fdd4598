use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, FacultyDayDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        schedule::{DaySelector, ScheduleRepository},
        settings::SettingsRepository,
    },
};

/// Read-only view of faculty timetables.
pub struct FacultyQueryService {
    faculty: Arc<dyn ScheduleRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl FacultyQueryService {
    pub fn new(
        faculty: Arc<dyn ScheduleRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self { faculty, settings }
    }

    pub async fn list_faculty(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<String>> {
        ensure_capability(actor, "faculty", "read")?;
        let faculty = self.faculty.load().await?;
        Ok(faculty.names().map(str::to_string).collect())
    }

    pub async fn faculty_day(
        &self,
        actor: &AuthenticatedUser,
        name: &str,
        day: DaySelector,
    ) -> ApplicationResult<FacultyDayDto> {
        ensure_capability(actor, "faculty", "read")?;
        let policy = self.settings.load().await?.saturday_policy();
        let day = day.resolve(&policy)?;

        let faculty = self.faculty.load().await?;
        let view = faculty.day_view(name, &day).ok_or_else(|| {
            ApplicationError::not_found(format!("no timetable for {name} on {day}"))
        })?;
        Ok(FacultyDayDto {
            name: name.to_string(),
            day,
            free: view.free,
            busy: view.booked,
        })
    }
}
