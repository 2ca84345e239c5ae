//! Topic-based event bus for runtime events.
//!
//! The battle rules return progression changes as values; the runtime
//! publishes them here once the records are saved.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::{ArenaEvent, Topic};
