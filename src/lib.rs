pub mod calendar;
pub mod catalog;
pub mod config;
pub mod events;
pub mod filter;
pub mod selection;
pub mod session;
pub mod tracing;
