//! Repository layer for saved sessions.
//!
//! Repositories handle data that CHANGES during play: the snapshot of each
//! session. Scenario content is static and is loaded by `game-content`.

mod error;
mod file;
mod memory;
mod snapshot;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use snapshot::SaveService;
pub use traits::SaveRepository;
pub use types::{SAVE_FORMAT_VERSION, SaveEnvelope, SaveSummary, checksum};
