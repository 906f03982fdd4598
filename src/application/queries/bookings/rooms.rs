use super::BookingQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, RoomSummaryDto},
        error::ApplicationResult,
    },
    domain::schedule::calendar::WEEK_ORDER,
};

impl BookingQueryService {
    /// Every room with the days it has a timetable for, in week order.
    pub async fn list_rooms(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<RoomSummaryDto>> {
        ensure_capability(actor, "schedules", "read")?;
        let rooms = self.rooms.load().await?;
        Ok(rooms
            .entities()
            .map(|(name, schedule)| {
                let mut days: Vec<String> = schedule.keys().cloned().collect();
                days.sort_by_key(|d| {
                    WEEK_ORDER
                        .iter()
                        .position(|w| w == d)
                        .unwrap_or(WEEK_ORDER.len())
                });
                RoomSummaryDto {
                    name: name.to_string(),
                    days,
                }
            })
            .collect())
    }
}
