//! Persistence runtime for investigation sessions.
//!
//! The core exposes a [`game_core::GameSnapshot`] after every turn; this
//! crate stores, lists and reloads them. Consumers go through
//! [`SaveService`], which sits on top of a [`SaveRepository`]:
//! - [`FileSaveRepository`] writes checksummed bincode envelopes to disk
//! - [`InMemorySaveRepository`] keeps everything in process, for tests and
//!   sessions with persistence disabled
pub mod repository;

pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, Result, SAVE_FORMAT_VERSION,
    SaveEnvelope, SaveRepository, SaveService, SaveSummary,
};
