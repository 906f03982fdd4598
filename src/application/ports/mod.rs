// src/application/ports/mod.rs
pub mod media_files;
pub mod notifier;
pub mod security;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type ShareLinkSignerPort = dyn security::ShareLinkSigner;
pub type ClockPort = dyn time::Clock;
pub type NotifierPort = dyn notifier::Notifier;
pub type MediaFileStorePort = dyn media_files::MediaFileStore;
