//! In-memory repository implementations for testing and development.

mod state;

pub use state::InMemorySaveRepository;
