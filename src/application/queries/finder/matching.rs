//! Pure room/slot matching behind the free-room finder.

use crate::{
    application::dto::{PartialMatchDto, RoomMatchDto},
    domain::schedule::{ScheduleBook, slot_time},
};

/// Rooms free for every requested slot, and rooms free for only some.
/// Rooms without a timetable for `day` are skipped; a requested slot the
/// room does not have counts as unavailable.
pub(super) fn match_rooms(
    rooms: &ScheduleBook,
    day: &str,
    slots: &[String],
) -> (Vec<RoomMatchDto>, Vec<PartialMatchDto>) {
    let mut matches = Vec::new();
    let mut partial = Vec::new();

    for (room, _) in rooms.entities() {
        if rooms.day(room, day).is_none() {
            continue;
        }
        let (available, unavailable): (Vec<String>, Vec<String>) = slots
            .iter()
            .cloned()
            .partition(|slot| rooms.is_occupied(room, day, slot) == Some(false));

        if unavailable.is_empty() {
            matches.push(RoomMatchDto {
                room: room.to_string(),
                available_slots: available,
            });
        } else if !available.is_empty() {
            partial.push(PartialMatchDto {
                room: room.to_string(),
                available,
                unavailable,
            });
        }
    }
    (matches, partial)
}

/// Requested slot labels trimmed, de-duplicated and in start-time order.
pub(super) fn normalize_slots(slots: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(slots.len());
    for slot in slots {
        let slot = slot.trim().to_string();
        if !slot.is_empty() && !out.contains(&slot) {
            out.push(slot);
        }
    }
    out.sort_by_key(|s| slot_time::sort_key(s));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn book(rooms: &[(&str, &[(&str, bool)])]) -> ScheduleBook {
        let mut entities = BTreeMap::new();
        for (room, slots) in rooms {
            let day: BTreeMap<String, bool> =
                slots.iter().map(|(s, o)| (s.to_string(), *o)).collect();
            entities.insert(room.to_string(), BTreeMap::from([("Monday".to_string(), day)]));
        }
        ScheduleBook::new(entities)
    }

    fn slots(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_rooms_each_missing_one_slot_are_partial() {
        let rooms = book(&[
            ("Room1", &[("9AM-10AM", false), ("10AM-11AM", true)]),
            ("Room2", &[("9AM-10AM", true), ("10AM-11AM", false)]),
        ]);
        let (matches, partial) = match_rooms(&rooms, "Monday", &slots(&["9AM-10AM", "10AM-11AM"]));

        assert!(matches.is_empty());
        assert_eq!(partial.len(), 2);
        assert_eq!(partial[0].room, "Room1");
        assert_eq!(partial[0].available, vec!["9AM-10AM"]);
        assert_eq!(partial[0].unavailable, vec!["10AM-11AM"]);
        assert_eq!(partial[1].available, vec!["10AM-11AM"]);
    }

    #[test]
    fn unknown_slot_counts_as_unavailable() {
        let rooms = book(&[("Room1", &[("9AM-10AM", false)])]);
        let (matches, partial) = match_rooms(&rooms, "Monday", &slots(&["9AM-10AM", "4PM-5PM"]));
        assert!(matches.is_empty());
        assert_eq!(partial[0].unavailable, vec!["4PM-5PM"]);
    }

    #[test]
    fn rooms_without_the_day_are_skipped() {
        let rooms = book(&[("Room1", &[("9AM-10AM", false)])]);
        let (matches, partial) = match_rooms(&rooms, "Tuesday", &slots(&["9AM-10AM"]));
        assert!(matches.is_empty() && partial.is_empty());
    }

    #[test]
    fn slots_are_normalized() {
        assert_eq!(
            normalize_slots(slots(&[" 1PM-2PM", "9AM-10AM", "1PM-2PM", ""])),
            vec!["9AM-10AM", "1PM-2PM"]
        );
    }
}
