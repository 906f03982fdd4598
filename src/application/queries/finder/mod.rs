mod find;
mod matching;
mod service;

pub use find::FindFreeRoomsQuery;
pub use service::FinderQueryService;
