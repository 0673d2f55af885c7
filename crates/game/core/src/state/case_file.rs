//! The secret killer/weapon pair and the verdict check.

use crate::error::{ErrorSeverity, GameError};

use super::common::{ItemId, NpcId};

/// Outcome of an accusation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Correct,
    Wrong,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaseFileError {
    #[error("case file is already sealed")]
    AlreadySealed,

    #[error("accusation against an unsealed case file")]
    Unsealed,
}

impl GameError for CaseFileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadySealed => "CASE_FILE_ALREADY_SEALED",
            Self::Unsealed => "CASE_FILE_UNSEALED",
        }
    }
}

/// Holds the secret pair. It is written once while the scenario is built and
/// only read back by [`accuse`](Self::accuse).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseFile {
    secret: Option<(NpcId, ItemId)>,
}

impl CaseFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seal(&mut self, suspect: NpcId, weapon: ItemId) -> Result<(), CaseFileError> {
        if self.secret.is_some() {
            return Err(CaseFileError::AlreadySealed);
        }
        self.secret = Some((suspect, weapon));
        Ok(())
    }

    pub fn is_sealed(&self) -> bool {
        self.secret.is_some()
    }

    pub fn accuse(&self, suspect: NpcId, weapon: ItemId) -> Result<Verdict, CaseFileError> {
        let (killer, murder_weapon) = self.secret.ok_or(CaseFileError::Unsealed)?;
        if killer == suspect && murder_weapon == weapon {
            Ok(Verdict::Correct)
        } else {
            Ok(Verdict::Wrong)
        }
    }
}
