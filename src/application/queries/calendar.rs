use crate::{
    application::{
        dto::MonthSaturdaysDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::LocalClock,
    },
    domain::schedule::calendar,
};

pub struct CalendarQueryService {
    clock: LocalClock,
}

impl CalendarQueryService {
    pub fn new(clock: LocalClock) -> Self {
        Self { clock }
    }

    /// Saturdays of the month with their working status, and the next
    /// working Saturday from today.
    pub fn month_saturdays(&self, year: i32, month: u32) -> ApplicationResult<MonthSaturdaysDto> {
        if !(1..=12).contains(&month) {
            return Err(ApplicationError::validation(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let saturdays = calendar::saturday_schedule(year, month);
        if saturdays.is_empty() {
            return Err(ApplicationError::validation(format!(
                "year {year} is out of range"
            )));
        }
        Ok(MonthSaturdaysDto {
            year,
            month,
            saturdays: saturdays.into_iter().map(Into::into).collect(),
            next_working_saturday: calendar::next_working_saturday(self.clock.today()),
        })
    }
}
