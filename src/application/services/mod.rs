// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            auth::{AuthCommandService, AuthenticateCommand},
            bookings::BookingCommandService,
            capability::ensure_capability,
            media::MediaCommandService,
            notifications::NotificationCommandService,
            settings::SettingsCommandService,
            waitlist::WaitlistCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            MediaFileStorePort, NotifierPort, PasswordHasherPort, ShareLinkSignerPort,
            time::LocalClock,
        },
        queries::{
            admin::AdminQueryService, audit::AuditQueryService, bookings::BookingQueryService,
            calendar::CalendarQueryService, faculty::FacultyQueryService,
            finder::FinderQueryService, media::MediaQueryService,
            notifications::NotificationQueryService, waitlist::WaitlistQueryService,
        },
    },
    domain::{
        audit::AuditLogRepository, booking::BookingHistoryRepository,
        faculty::FacultyIdentityRepository, media::MediaRepository,
        notification::InAppNotificationRepository, schedule::ScheduleRepository,
        settings::SettingsRepository, user::UserRepository, waitlist::WaitlistRepository,
    },
};

/// Every repository the application layer reads or writes.
#[derive(Clone)]
pub struct Repositories {
    pub rooms: Arc<dyn ScheduleRepository>,
    pub faculty: Arc<dyn ScheduleRepository>,
    pub identities: Arc<dyn FacultyIdentityRepository>,
    pub audit: Arc<dyn AuditLogRepository>,
    pub history: Arc<dyn BookingHistoryRepository>,
    pub waitlist: Arc<dyn WaitlistRepository>,
    pub users: Arc<dyn UserRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub notifications: Arc<dyn InAppNotificationRepository>,
}

pub struct ApplicationServices {
    pub auth: Arc<AuthCommandService>,
    pub bookings: Arc<BookingCommandService>,
    pub waitlist: Arc<WaitlistCommandService>,
    pub media: Arc<MediaCommandService>,
    pub notifications: Arc<NotificationCommandService>,
    pub settings: Arc<SettingsCommandService>,
    pub booking_queries: Arc<BookingQueryService>,
    pub finder: Arc<FinderQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    pub faculty_queries: Arc<FacultyQueryService>,
    pub calendar: Arc<CalendarQueryService>,
    pub admin: Arc<AdminQueryService>,
    pub notification_queries: Arc<NotificationQueryService>,
    pub media_queries: Arc<MediaQueryService>,
    pub waitlist_queries: Arc<WaitlistQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<PasswordHasherPort>,
        share_signer: Arc<ShareLinkSignerPort>,
        notifier: Arc<NotifierPort>,
        media_files: Arc<MediaFileStorePort>,
        clock: LocalClock,
    ) -> Self {
        let auth = Arc::new(AuthCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
        ));

        let waitlist = Arc::new(WaitlistCommandService::new(
            Arc::clone(&repos.waitlist),
            Arc::clone(&repos.audit),
            Arc::clone(&repos.settings),
            Arc::clone(&notifier),
            clock.clone(),
        ));

        let bookings = Arc::new(BookingCommandService::new(
            Arc::clone(&repos.rooms),
            Arc::clone(&repos.faculty),
            Arc::clone(&repos.identities),
            Arc::clone(&repos.audit),
            Arc::clone(&repos.history),
            Arc::clone(&repos.settings),
            Arc::clone(&waitlist),
            Arc::clone(&notifier),
            clock.clone(),
        ));

        let media = Arc::new(MediaCommandService::new(
            Arc::clone(&repos.media),
            Arc::clone(&media_files),
            Arc::clone(&share_signer),
            Arc::clone(&repos.settings),
            Arc::clone(&repos.audit),
            clock.clone(),
        ));

        let notifications = Arc::new(NotificationCommandService::new(
            Arc::clone(&repos.notifications),
            Arc::clone(&repos.settings),
        ));

        let settings = Arc::new(SettingsCommandService::new(Arc::clone(&repos.settings)));

        let booking_queries = Arc::new(BookingQueryService::new(
            Arc::clone(&repos.rooms),
            Arc::clone(&repos.history),
        ));
        let finder = Arc::new(FinderQueryService::new(
            Arc::clone(&repos.rooms),
            Arc::clone(&repos.settings),
            Arc::clone(&repos.audit),
            clock.clone(),
        ));
        let audit_queries = Arc::new(AuditQueryService::new(
            Arc::clone(&repos.audit),
            Arc::clone(&repos.rooms),
        ));
        let faculty_queries = Arc::new(FacultyQueryService::new(
            Arc::clone(&repos.faculty),
            Arc::clone(&repos.settings),
        ));
        let calendar = Arc::new(CalendarQueryService::new(clock.clone()));
        let admin = Arc::new(AdminQueryService::new(
            Arc::clone(&repos.rooms),
            Arc::clone(&repos.faculty),
            Arc::clone(&repos.users),
            Arc::clone(&repos.audit),
            Arc::clone(&repos.media),
        ));
        let notification_queries = Arc::new(NotificationQueryService::new(
            Arc::clone(&repos.notifications),
            Arc::clone(&repos.settings),
        ));
        let media_queries = Arc::new(MediaQueryService::new(
            Arc::clone(&repos.media),
            Arc::clone(&share_signer),
            Arc::clone(&repos.settings),
            clock,
        ));
        let waitlist_queries = Arc::new(WaitlistQueryService::new(Arc::clone(&repos.waitlist)));

        Self {
            auth,
            bookings,
            waitlist,
            media,
            notifications,
            settings,
            booking_queries,
            finder,
            audit_queries,
            faculty_queries,
            calendar,
            admin,
            notification_queries,
            media_queries,
            waitlist_queries,
        }
    }

    /// Verifies credentials and, when given, one required capability, so
    /// presentation extractors only have to delegate here.
    pub async fn authenticate_and_authorize(
        &self,
        email: &str,
        password: &str,
        required: Option<(&str, &str)>,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self
            .auth
            .authenticate(AuthenticateCommand {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        if let Some((resource, action)) = required {
            ensure_capability(&user, resource, action)?;
        }
        Ok(user)
    }
}
