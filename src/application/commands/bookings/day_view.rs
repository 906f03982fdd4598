// src/application/commands/bookings/day_view.rs
use super::BookingCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, RoomDayDto, SlotDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        booking::HistoryLedger,
        schedule::{DaySelector, SlotPhase},
    },
};

pub struct RoomDayQuery {
    pub room: String,
    pub day: DaySelector,
}

impl BookingCommandService {
    /// One room's slots for a day. Sweeps expired bookings first so the view
    /// never shows a slot whose time has already passed as occupied.
    pub async fn day_view(
        &self,
        actor: &AuthenticatedUser,
        query: RoomDayQuery,
    ) -> ApplicationResult<RoomDayDto> {
        ensure_capability(actor, "schedules", "read")?;

        let now = self.clock.now();
        let expired = self.auto_expire(now).await?;

        let policy = self.saturday_policy().await?;
        let day = query.day.resolve(&policy)?;
        let rooms = self.rooms.load().await?;
        let view = rooms.day_view(&query.room, &day).ok_or_else(|| {
            ApplicationError::not_found(format!("no timetable for {} on {day}", query.room))
        })?;

        let today = query.day.date().filter(|date| *date == now.date());
        let slots = rooms
            .slot_labels(&query.room, &day)
            .into_iter()
            .map(|label| {
                let occupied = view.booked.contains(&label);
                let phase = today.map(|date| SlotPhase::at(&label, date, now));
                SlotDto::new(label, occupied, phase)
            })
            .collect();

        let my_bookings = if actor.has_capability("bookings", "cancel") {
            let ledger = HistoryLedger::new(self.history.list().await?);
            ledger.active_bookings(&actor.email, &query.room, &day, &rooms)
        } else {
            Vec::new()
        };

        Ok(RoomDayDto {
            room: query.room,
            date: query.day.date(),
            day,
            slots,
            free: view.free.len(),
            total: view.total(),
            expired: expired.into_iter().map(Into::into).collect(),
            my_bookings,
        })
    }
}
