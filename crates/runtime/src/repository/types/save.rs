//! On-disk envelope around an encoded snapshot.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use game_core::GameSnapshot;

use crate::repository::{RepositoryError, Result};

/// Version of the envelope layout. Independent of
/// [`game_core::SNAPSHOT_VERSION`], which versions the payload.
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// Hex-encoded SHA-256 of `bytes`.
pub fn checksum(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Listing entry for one save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSummary {
    /// Session id, a sortable creation timestamp.
    pub id: String,
    pub ended: bool,
}

/// Save file contents.
///
/// # Data Layout
///
/// ```text
/// {session_id}.sav   ← bincode(SaveEnvelope)
///   payload          ← bincode(GameSnapshot)
/// ```
///
/// The header fields duplicate what the payload holds so a listing can be
/// produced without trusting the payload, and `checksum` lets a reader detect
/// truncated or edited files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub format_version: u32,
    pub session_id: String,
    pub ended: bool,
    pub checksum: String,
    pub payload: Vec<u8>,
}

impl SaveEnvelope {
    /// Encodes `snapshot` into a sealed envelope.
    pub fn seal(snapshot: &GameSnapshot) -> Result<Self> {
        let payload = bincode::serialize(snapshot)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        Ok(Self {
            format_version: SAVE_FORMAT_VERSION,
            session_id: snapshot.session_id().to_owned(),
            ended: snapshot.is_ended(),
            checksum: checksum(&payload),
            payload,
        })
    }

    /// Checks the format version and the checksum.
    pub fn verify(&self) -> Result<()> {
        if self.format_version != SAVE_FORMAT_VERSION {
            return Err(RepositoryError::VersionMismatch {
                found: self.format_version,
                expected: SAVE_FORMAT_VERSION,
            });
        }
        let actual = checksum(&self.payload);
        if actual != self.checksum {
            return Err(RepositoryError::CorruptedData(format!(
                "checksum mismatch for save {}: expected {}, computed {}",
                self.session_id, self.checksum, actual
            )));
        }
        Ok(())
    }

    /// Verifies the envelope and decodes its snapshot.
    pub fn open(&self) -> Result<GameSnapshot> {
        self.verify()?;
        bincode::deserialize(&self.payload)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    pub fn summary(&self) -> SaveSummary {
        SaveSummary {
            id: self.session_id.clone(),
            ended: self.ended,
        }
    }
}
