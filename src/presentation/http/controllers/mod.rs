// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod audit;
pub mod bookings;
pub mod calendar;
pub mod faculty;
pub mod finder;
pub mod media;
pub mod notifications;
pub mod waitlist;

use super::error::{HttpError, HttpResult};
use crate::domain::schedule::DaySelector;

/// Accepts either an ISO date or a schedule day label.
pub(crate) fn parse_day(raw: String) -> HttpResult<DaySelector> {
    DaySelector::try_from(raw).map_err(HttpError::from_domain)
}
