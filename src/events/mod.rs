pub mod api;
pub mod dto;
pub mod model;
pub mod store;

pub use model::{Event, EventId, EventType};
pub use store::EventStore;
