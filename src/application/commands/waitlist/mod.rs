// src/application/commands/waitlist/mod.rs
mod cancel;
mod join;
mod promote;
mod service;

pub use cancel::CancelWaitlistEntryCommand;
pub use join::JoinWaitlistCommand;
pub use service::WaitlistCommandService;
