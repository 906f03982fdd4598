// src/domain/schedule/mod.rs
pub mod calendar;
pub mod entity;
pub mod repository;
pub mod slot_time;
pub mod value_objects;

pub use calendar::SaturdayPolicy;
pub use entity::{DaySlots, DayView, Schedule, ScheduleBook};
pub use repository::ScheduleRepository;
pub use slot_time::{SlotPhase, SlotTime};
pub use value_objects::{BookingKey, DaySelector};
