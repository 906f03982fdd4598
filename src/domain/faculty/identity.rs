// src/domain/faculty/identity.rs
//! Which faculty schedule belongs to a login.

use crate::domain::schedule::ScheduleBook;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit `email -> faculty name` table (`faculty_identities.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacultyIdentities {
    by_email: BTreeMap<String, String>,
}

impl FacultyIdentities {
    pub fn new(by_email: BTreeMap<String, String>) -> Self {
        Self {
            by_email: by_email
                .into_iter()
                .map(|(email, name)| (email.trim().to_lowercase(), name))
                .collect(),
        }
    }

    pub fn lookup(&self, email: &str) -> Option<&str> {
        self.by_email
            .get(&email.trim().to_lowercase())
            .map(String::as_str)
    }

    /// The faculty entity for `email`: the explicit table wins, otherwise
    /// the first faculty whose name contains the derived display name.
    pub fn resolve<'a>(&self, email: &str, faculty: &'a ScheduleBook) -> Option<&'a str> {
        if let Some(name) = self.lookup(email) {
            return faculty.names().find(|n| *n == name);
        }
        let derived = derived_display_name(email)?;
        faculty.names().find(|n| n.contains(derived.as_str()))
    }
}

/// `"jane.doe@uni.edu"` becomes `"Jane Doe"`.
pub fn derived_display_name(email: &str) -> Option<String> {
    let local = email.trim().split('@').next()?.replace('.', " ");
    let name = title_case(&local);
    (!name.trim().is_empty()).then_some(name)
}

/// Upper-cases every letter that follows a non-letter and lower-cases the
/// rest, so `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faculty() -> ScheduleBook {
        serde_json::from_value(serde_json::json!({
            "Dr. Jane Doe": { "Monday": { "9AM-10AM": true } },
            "Prof. Alan Turing": { "Monday": { "9AM-10AM": false } }
        }))
        .unwrap()
    }

    #[test]
    fn derives_title_cased_name() {
        assert_eq!(derived_display_name("jane.doe@uni.edu").as_deref(), Some("Jane Doe"));
        assert_eq!(derived_display_name("ALAN@uni.edu").as_deref(), Some("Alan"));
        assert_eq!(derived_display_name("@uni.edu"), None);
    }

    #[test]
    fn capitalizes_after_any_non_letter() {
        assert_eq!(
            derived_display_name("mary-jane.smith@uni.edu").as_deref(),
            Some("Mary-Jane Smith")
        );
        assert_eq!(derived_display_name("o'neil@uni.edu").as_deref(), Some("O'Neil"));
        assert_eq!(derived_display_name("lab2b@uni.edu").as_deref(), Some("Lab2B"));
    }

    #[test]
    fn explicit_mapping_beats_heuristic() {
        let ids = FacultyIdentities::new(BTreeMap::from([(
            "JDoe@uni.edu".to_string(),
            "Prof. Alan Turing".to_string(),
        )]));
        assert_eq!(ids.resolve("jdoe@uni.edu", &faculty()), Some("Prof. Alan Turing"));
        assert_eq!(ids.resolve("jane.doe@uni.edu", &faculty()), Some("Dr. Jane Doe"));
        assert_eq!(ids.resolve("nobody@uni.edu", &faculty()), None);
    }

    #[test]
    fn mapping_to_unknown_faculty_resolves_to_nothing() {
        let ids = FacultyIdentities::new(BTreeMap::from([(
            "jane.doe@uni.edu".to_string(),
            "Someone Else".to_string(),
        )]));
        assert_eq!(ids.resolve("jane.doe@uni.edu", &faculty()), None);
    }
}
