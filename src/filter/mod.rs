pub mod engine;
pub mod state;

pub use engine::filter_events;
pub use state::{EventTypeFilter, FilterState, InstitutionChoice};
