// src/application/commands/bookings/conflicts.rs
use super::BookingCommandService;
use tracing::debug;

impl BookingCommandService {
    /// Advisory warnings when the booking teacher's own faculty timetable is
    /// busy at `day`/`slot`. Lookup failures produce no warnings.
    pub async fn check_conflicts(&self, email: &str, day: &str, slot: &str) -> Vec<String> {
        let (faculty, identities) = match (self.faculty.load().await, self.identities.load().await)
        {
            (Ok(faculty), Ok(identities)) => (faculty, identities),
            (Err(err), _) | (_, Err(err)) => {
                debug!(error = %err, "faculty data unavailable for conflict check");
                return Vec::new();
            }
        };

        let Some(name) = identities.resolve(email, &faculty) else {
            return Vec::new();
        };
        if faculty.is_occupied(name, day, slot) == Some(true) {
            vec![format!(
                "{name} has a conflicting commitment at {slot} on {day}"
            )]
        } else {
            Vec::new()
        }
    }
}
