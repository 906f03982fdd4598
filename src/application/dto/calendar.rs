// src/application/dto/calendar.rs
use crate::domain::schedule::calendar::SaturdayInfo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaturdayDto {
    pub date: NaiveDate,
    pub ordinal: u32,
    pub is_working: bool,
}

impl From<SaturdayInfo> for SaturdayDto {
    fn from(s: SaturdayInfo) -> Self {
        Self {
            date: s.date,
            ordinal: s.ordinal,
            is_working: s.is_working,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthSaturdaysDto {
    pub year: i32,
    pub month: u32,
    pub saturdays: Vec<SaturdayDto>,
    pub next_working_saturday: NaiveDate,
}
