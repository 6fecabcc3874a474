//! Signup draft persistence
//!
//! Saves the recoverable parts of an in-progress signup to a local JSON
//! file. Only the email and the terms checkbox are persisted - never the
//! password.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The persisted slice of the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignupDraft {
    pub email: String,
    #[serde(default)]
    pub terms: bool,
}

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Failed to access draft file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode draft: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store for a single signup draft.
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        DraftStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the path from `SIGNUP_DRAFT_PATH`, or `./signup-draft.json`
    /// if the variable is not set.
    pub fn from_env() -> Self {
        let path = std::env::var("SIGNUP_DRAFT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./signup-draft.json"));
        DraftStore::new(path)
    }

    pub fn save(&self, draft: &SignupDraft) -> Result<(), DraftError> {
        let json = serde_json::to_string(draft)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Loads the stored draft. A missing or unreadable file loads as `None`,
    /// so a corrupt draft resets the form instead of failing it.
    pub fn load(&self) -> Result<Option<SignupDraft>, DraftError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DraftError::Io(e)),
        };
        Ok(serde_json::from_str(&content).ok())
    }

    /// Removes the stored draft. Removing a missing draft is not an error.
    pub fn clear(&self) -> Result<(), DraftError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DraftError::Io(e)),
        }
    }
}
