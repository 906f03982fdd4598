// src/domain/schedule/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::slot_time;
use crate::domain::schedule::value_objects::BookingKey;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// slot label -> occupied
pub type DaySlots = BTreeMap<String, bool>;
/// day label -> slots
pub type Schedule = BTreeMap<String, DaySlots>;

/// All schedules of one kind (rooms or faculty), keyed by entity name.
///
/// Serialized transparently as the nested `name -> day -> slot -> bool`
/// mapping stored in `rooms.json` / `faculty.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleBook {
    entities: BTreeMap<String, Schedule>,
}

/// Free and occupied slots of one entity on one day, in start-time order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub free: Vec<String>,
    pub booked: Vec<String>,
}

impl DayView {
    pub fn total(&self) -> usize {
        self.free.len() + self.booked.len()
    }
}

impl ScheduleBook {
    pub fn new(entities: BTreeMap<String, Schedule>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn entities(&self) -> impl Iterator<Item = (&str, &Schedule)> {
        self.entities.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn schedule(&self, entity: &str) -> Option<&Schedule> {
        self.entities.get(entity)
    }

    pub fn day(&self, entity: &str, day: &str) -> Option<&DaySlots> {
        self.entities.get(entity)?.get(day)
    }

    /// `None` when the entity, day or slot does not exist.
    pub fn is_occupied(&self, entity: &str, day: &str, slot: &str) -> Option<bool> {
        self.day(entity, day)?.get(slot).copied()
    }

    /// A missing key is a defined miss: unavailable, not an error.
    pub fn is_free(&self, entity: &str, day: &str, slot: &str) -> bool {
        self.is_occupied(entity, day, slot) == Some(false)
    }

    pub fn set_occupied(&mut self, key: &BookingKey, occupied: bool) -> DomainResult<()> {
        *self.slot_mut(key)? = occupied;
        Ok(())
    }

    /// Flips the slot to `occupied` only if it currently holds `expected`.
    pub fn compare_and_set(
        &mut self,
        key: &BookingKey,
        expected: bool,
        occupied: bool,
    ) -> DomainResult<()> {
        let slot = self.slot_mut(key)?;
        if *slot != expected {
            return Err(DomainError::StaleState(if *slot {
                format!("{key} was just booked by someone else")
            } else {
                format!("{key} was released by someone else")
            }));
        }
        *slot = occupied;
        Ok(())
    }

    /// Frees every occupied slot on `day` whose end on `date` is at or
    /// before `now`, returning the released keys.
    pub fn release_elapsed(
        &mut self,
        day: &str,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> Vec<BookingKey> {
        let mut released = Vec::new();
        for (room, schedule) in &mut self.entities {
            let Some(slots) = schedule.get_mut(day) else {
                continue;
            };
            for (slot, occupied) in slots.iter_mut() {
                if *occupied && slot_time::has_elapsed(slot, date, now) {
                    *occupied = false;
                    released.push(BookingKey {
                        room: room.clone(),
                        day: day.to_string(),
                        slot: slot.clone(),
                    });
                }
            }
        }
        released
    }

    pub fn day_view(&self, entity: &str, day: &str) -> Option<DayView> {
        let slots = self.day(entity, day)?;
        let (booked, free): (Vec<_>, Vec<_>) = sorted_labels(slots)
            .into_iter()
            .partition(|label| slots.get(label).copied().unwrap_or(false));
        Some(DayView { free, booked })
    }

    pub fn slot_labels(&self, entity: &str, day: &str) -> Vec<String> {
        self.day(entity, day).map(sorted_labels).unwrap_or_default()
    }

    fn slot_mut(&mut self, key: &BookingKey) -> DomainResult<&mut bool> {
        let schedule = self
            .entities
            .get_mut(&key.room)
            .ok_or_else(|| DomainError::NotFound(format!("room '{}'", key.room)))?;
        let slots = schedule.get_mut(&key.day).ok_or_else(|| {
            DomainError::NotFound(format!("no timetable for {} on {}", key.room, key.day))
        })?;
        slots.get_mut(&key.slot).ok_or_else(|| {
            DomainError::NotFound(format!("slot '{}' in {} on {}", key.slot, key.room, key.day))
        })
    }
}

fn sorted_labels(slots: &DaySlots) -> Vec<String> {
    let mut labels: Vec<String> = slots.keys().cloned().collect();
    labels.sort_by_key(|label| slot_time::sort_key(label));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> ScheduleBook {
        serde_json::from_value(serde_json::json!({
            "Room1": {
                "Monday": { "9AM-10AM": false, "10AM-11AM": true, "1PM-2PM": false },
                "Tuesday": { "9AM-10AM": true }
            },
            "Room2": {
                "Monday": { "9AM-10AM": true }
            }
        }))
        .unwrap()
    }

    fn key(room: &str, day: &str, slot: &str) -> BookingKey {
        BookingKey::new(room, day, slot).unwrap()
    }

    #[test]
    fn lookups_treat_missing_keys_as_unavailable() {
        let book = book();
        assert!(book.is_free("Room1", "Monday", "9AM-10AM"));
        assert!(!book.is_free("Room1", "Monday", "10AM-11AM"));
        assert!(!book.is_free("Room1", "Sunday", "9AM-10AM"));
        assert!(!book.is_free("Room9", "Monday", "9AM-10AM"));
        assert_eq!(book.is_occupied("Room1", "Monday", "4PM-5PM"), None);
    }

    #[test]
    fn set_occupied_never_creates_slots() {
        let mut book = book();
        let err = book
            .set_occupied(&key("Room1", "Monday", "4PM-5PM"), true)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn compare_and_set_detects_stale_reads() {
        let mut book = book();
        let k = key("Room1", "Monday", "9AM-10AM");
        book.compare_and_set(&k, false, true).unwrap();
        let err = book.compare_and_set(&k, false, true).unwrap_err();
        assert!(matches!(err, DomainError::StaleState(_)));
        assert!(!book.is_free("Room1", "Monday", "9AM-10AM"));
    }

    #[test]
    fn day_view_orders_slots_by_start_time() {
        let view = book().day_view("Room1", "Monday").unwrap();
        assert_eq!(view.free, vec!["9AM-10AM", "1PM-2PM"]);
        assert_eq!(view.booked, vec!["10AM-11AM"]);
        assert_eq!(view.total(), 3);
    }

    #[test]
    fn release_elapsed_only_touches_the_given_day() {
        let mut book = book();
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let now = date.and_hms_opt(12, 0, 0).unwrap();

        let released = book.release_elapsed("Monday", date, now);
        let ids: Vec<String> = released.iter().map(BookingKey::entity_id).collect();
        assert_eq!(ids, vec!["Room1|Monday|10AM-11AM", "Room2|Monday|9AM-10AM"]);
        assert!(book.is_occupied("Room1", "Tuesday", "9AM-10AM").unwrap());

        assert!(book.release_elapsed("Monday", date, now).is_empty());
    }
}
