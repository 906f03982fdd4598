// src/application/ports/time.rs
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock view of a `Clock` at the portal's fixed UTC offset. Slot
/// labels are local times, so expiry and "today" are computed here.
#[derive(Clone)]
pub struct LocalClock {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl LocalClock {
    pub fn new(clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self { clock, offset }
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.utc().with_timezone(&self.offset).naive_local()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}
