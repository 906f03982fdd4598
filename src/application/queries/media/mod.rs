mod browse;
mod service;
mod share;

pub use browse::MediaSearchQuery;
pub use service::MediaQueryService;
