// tests/support/builders.rs
use super::mocks::{FixedClock, RecordingNotifier, SUNDAY_MORNING};
use campus_portal::{
    application::{
        dto::AuthenticatedUser,
        ports::time::LocalClock,
        services::{ApplicationServices, Repositories},
    },
    domain::user::Role,
    infrastructure::{
        json_store::JsonStore,
        media_files::LocalMediaFileStore,
        repositories::{
            JsonAuditLogRepository, JsonBookingHistoryRepository, JsonFacultyIdentityRepository,
            JsonMediaRepository, JsonNotificationRepository, JsonScheduleRepository,
            JsonSettingsRepository, JsonUserRepository, JsonWaitlistRepository,
        },
        security::{password::Argon2PasswordHasher, share_links::HmacShareLinkSigner},
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use chrono::FixedOffset;
use serde_json::{Value, json};
use std::{path::PathBuf, sync::Arc};
use tempfile::TempDir;

pub const TEACHER_A: &str = "alice.smith@uni.edu";
pub const TEACHER_B: &str = "bob.jones@uni.edu";
pub const TEACHER_C: &str = "carol.white@uni.edu";
pub const STUDENT: &str = "sam.student@uni.edu";
/// Every fixture account uses this legacy plaintext password.
pub const PASSWORD: &str = "correct-horse";

pub fn teacher(email: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(email, Role::Teacher)
}

pub fn student(email: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(email, Role::Student)
}

/// Room1 with free Monday morning slots, Room2 with a mix, and a working
/// Saturday timetable for Room1.
pub fn default_rooms() -> Value {
    json!({
        "Room1": {
            "Monday": { "9AM-10AM": false, "10AM-11AM": false, "11AM-12PM": true },
            "Saturday": { "9AM-10AM": false }
        },
        "Room2": {
            "Monday": { "9AM-10AM": true, "10AM-11AM": false, "11AM-12PM": false }
        }
    })
}

pub fn default_faculty() -> Value {
    json!({
        "Dr. Alice Smith": {
            "Monday": { "9AM-10AM": true, "10AM-11AM": false }
        },
        "Prof. Bob Jones": {
            "Monday": { "9AM-10AM": false, "10AM-11AM": false }
        }
    })
}

pub struct PortalBuilder {
    rooms: Value,
    faculty: Value,
    settings: Value,
    files: Vec<(String, Value)>,
}

impl Default for PortalBuilder {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
            faculty: default_faculty(),
            settings: json!({ "share_links": { "secret_key": "test-secret" } }),
            files: Vec::new(),
        }
    }
}

impl PortalBuilder {
    pub fn rooms(mut self, rooms: Value) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }

    /// Seeds an extra data file, e.g. an existing audit log.
    pub fn file(mut self, name: &str, content: Value) -> Self {
        self.files.push((name.to_string(), content));
        self
    }

    pub fn build(self) -> TestPortal {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        let write = |name: &str, value: &Value| {
            std::fs::write(data.join(name), serde_json::to_vec_pretty(value).unwrap()).unwrap();
        };
        write("rooms.json", &self.rooms);
        write("faculty.json", &self.faculty);
        write("settings.json", &self.settings);
        write(
            "users.json",
            &json!([
                { "email": TEACHER_A, "password": PASSWORD, "role": "Teacher" },
                { "email": TEACHER_B, "password": PASSWORD, "role": "Teacher" },
                { "email": TEACHER_C, "password": PASSWORD, "role": "Teacher" },
                { "email": STUDENT, "password": PASSWORD, "role": "Student" }
            ]),
        );
        for (name, content) in &self.files {
            write(name, content);
        }

        let store = Arc::new(JsonStore::new(data.clone()));
        let repos = Repositories {
            rooms: Arc::new(JsonScheduleRepository::rooms(Arc::clone(&store))),
            faculty: Arc::new(JsonScheduleRepository::faculty(Arc::clone(&store))),
            identities: Arc::new(JsonFacultyIdentityRepository::new(Arc::clone(&store))),
            audit: Arc::new(JsonAuditLogRepository::new(Arc::clone(&store))),
            history: Arc::new(JsonBookingHistoryRepository::new(Arc::clone(&store))),
            waitlist: Arc::new(JsonWaitlistRepository::new(Arc::clone(&store))),
            users: Arc::new(JsonUserRepository::new(Arc::clone(&store))),
            settings: Arc::new(JsonSettingsRepository::new(Arc::clone(&store))),
            media: Arc::new(JsonMediaRepository::new(Arc::clone(&store))),
            notifications: Arc::new(JsonNotificationRepository::new(Arc::clone(&store))),
        };

        let clock = Arc::new(FixedClock::at(*SUNDAY_MORNING));
        let notifier = Arc::new(RecordingNotifier::default());
        let uploads = dir.path().join("uploads");
        let local_clock = LocalClock::new(
            clock.clone(),
            FixedOffset::east_opt(0).unwrap(),
        );
        let services = Arc::new(ApplicationServices::new(
            repos.clone(),
            Arc::new(Argon2PasswordHasher),
            Arc::new(HmacShareLinkSigner),
            notifier.clone(),
            Arc::new(LocalMediaFileStore::new(uploads.clone())),
            local_clock,
        ));

        TestPortal {
            _dir: dir,
            repos,
            services,
            notifier,
            clock,
            uploads,
            data,
        }
    }
}

pub struct TestPortal {
    _dir: TempDir,
    pub repos: Repositories,
    pub services: Arc<ApplicationServices>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: Arc<FixedClock>,
    pub uploads: PathBuf,
    pub data: PathBuf,
}

impl TestPortal {
    pub fn router(&self) -> axum::Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &[],
        )
    }

    /// Overwrites a data file with raw text, bypassing serialization.
    pub fn corrupt(&self, name: &str, raw: &str) {
        std::fs::write(self.data.join(name), raw).unwrap();
    }

    pub async fn is_free(&self, room: &str, day: &str, slot: &str) -> bool {
        self.repos.rooms.load().await.unwrap().is_free(room, day, slot)
    }
}

pub fn make_test_portal() -> TestPortal {
    PortalBuilder::default().build()
}
