mod albums;
mod review;
mod service;
mod share;
mod upload;

pub use albums::CreateAlbumCommand;
pub use review::RejectMediaCommand;
pub use service::MediaCommandService;
pub use share::ShareMediaCommand;
pub use upload::UploadMediaCommand;
