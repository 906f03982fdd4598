use std::sync::Arc;

use crate::domain::{booking::BookingHistoryRepository, schedule::ScheduleRepository};

pub struct BookingQueryService {
    pub(super) rooms: Arc<dyn ScheduleRepository>,
    pub(super) history: Arc<dyn BookingHistoryRepository>,
}

impl BookingQueryService {
    pub fn new(
        rooms: Arc<dyn ScheduleRepository>,
        history: Arc<dyn BookingHistoryRepository>,
    ) -> Self {
        Self { rooms, history }
    }
}
