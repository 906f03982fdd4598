mod manage;
mod service;

pub use service::NotificationCommandService;
