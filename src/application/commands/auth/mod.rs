mod authenticate;
mod manage;
mod password;
mod service;

pub use authenticate::AuthenticateCommand;
pub use manage::{AddUserCommand, DeleteUserCommand};
pub use service::AuthCommandService;
