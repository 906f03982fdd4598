use anyhow::Result;
use campus_portal::{
    application::{
        ports::{
            ClockPort, MediaFileStorePort, NotifierPort, PasswordHasherPort, ShareLinkSignerPort,
            time::LocalClock,
        },
        services::{ApplicationServices, Repositories},
    },
    config::AppConfig,
    domain::settings::SettingsRepository,
    infrastructure::{
        json_store::JsonStore,
        media_files::LocalMediaFileStore,
        notifications::{
            EmailChannel, InAppChannel, NotificationChannel, NotificationDispatcher, RetryPolicy,
            TelegramChannel, outbox,
        },
        repositories::{
            JsonAuditLogRepository, JsonBookingHistoryRepository, JsonFacultyIdentityRepository,
            JsonMediaRepository, JsonNotificationRepository, JsonScheduleRepository,
            JsonSettingsRepository, JsonUserRepository, JsonWaitlistRepository,
        },
        security::{password::Argon2PasswordHasher, share_links::HmacShareLinkSigner},
        time::SystemClock,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let store = Arc::new(JsonStore::new(config.data_dir().clone()));
    store.ensure_dir("").await?;
    let documents = store.list_dir("").await?;
    info!(
        data_dir = %config.data_dir().display(),
        documents = ?documents,
        "using JSON data directory"
    );

    let settings: Arc<dyn SettingsRepository> =
        Arc::new(JsonSettingsRepository::new(Arc::clone(&store)));
    let notification_repo = Arc::new(JsonNotificationRepository::new(Arc::clone(&store)));
    let repos = Repositories {
        rooms: Arc::new(JsonScheduleRepository::rooms(Arc::clone(&store))),
        faculty: Arc::new(JsonScheduleRepository::faculty(Arc::clone(&store))),
        identities: Arc::new(JsonFacultyIdentityRepository::new(Arc::clone(&store))),
        audit: Arc::new(JsonAuditLogRepository::new(Arc::clone(&store))),
        history: Arc::new(JsonBookingHistoryRepository::new(Arc::clone(&store))),
        waitlist: Arc::new(JsonWaitlistRepository::new(Arc::clone(&store))),
        users: Arc::new(JsonUserRepository::new(Arc::clone(&store))),
        settings: Arc::clone(&settings),
        media: Arc::new(JsonMediaRepository::new(Arc::clone(&store))),
        notifications: notification_repo.clone(),
    };

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let local_clock = LocalClock::new(Arc::clone(&clock), config.utc_offset());

    let (notifier, receiver) = outbox(config.notify_queue_capacity());
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let channels: Vec<Arc<dyn NotificationChannel>> = vec![
        Arc::new(InAppChannel::new(notification_repo, Arc::clone(&clock))),
        Arc::new(TelegramChannel::new(http.clone())),
        Arc::new(EmailChannel::new(http)),
    ];
    let retry = RetryPolicy {
        max_attempts: config.notify_max_attempts(),
        initial_backoff: config.notify_initial_backoff(),
        ..RetryPolicy::default()
    };
    let dispatcher = NotificationDispatcher::new(receiver, channels, Arc::clone(&settings), retry);
    let dispatcher_task = tokio::spawn(dispatcher.run());

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let share_signer: Arc<ShareLinkSignerPort> = Arc::new(HmacShareLinkSigner);
    let media_files: Arc<MediaFileStorePort> =
        Arc::new(LocalMediaFileStore::new(config.uploads_dir().clone()));
    let notifier: Arc<NotifierPort> = Arc::new(notifier);

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        share_signer,
        notifier,
        media_files,
        local_clock,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router held the last notifier handles; the dispatcher drains what
    // is queued and then stops.
    drop(services);
    if let Err(err) = dispatcher_task.await {
        warn!(error = %err, "notification dispatcher task failed");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
