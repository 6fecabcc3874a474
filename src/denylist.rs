//! Common-password denylist
//!
//! A built-in set of known-weak passwords, optionally extended once at
//! startup from an external file. Membership checks are case-insensitive.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Always-present denylist entries, stored lowercase.
pub const BUILTIN_DENYLIST: [&str; 12] = [
    "password",
    "123456",
    "123456789",
    "qwerty",
    "abc123",
    "password1",
    "111111",
    "12345678",
    "iloveyou",
    "admin",
    "welcome",
    "monkey",
];

static EXTRA_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the denylist file path.
///
/// Priority:
/// 1. Environment variable `SIGNUP_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("SIGNUP_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Extends the built-in denylist from an external file.
///
/// The built-in entries are always active; this only adds to them. Calling
/// it is optional — `is_common_password` works without any initialization.
///
/// # Environment Variable
///
/// Set `SIGNUP_DENYLIST_PATH` to specify a custom denylist file location.
/// If not set, defaults to `./assets/denylist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Extends the built-in denylist from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying on
/// environment variables. One entry per line; entries are trimmed and
/// lowercased. Returns the number of loaded extra entries.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    // Idempotent: if already initialized, return immediately
    {
        let guard = EXTRA_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {:?}", path);
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: Empty file {:?}", path);
        return Err(DenylistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTRA_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist extended: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Checks if a password is a known-common password (case-insensitive).
///
/// Matches against the built-in entries plus any loaded extras.
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    if BUILTIN_DENYLIST.contains(&lower.as_str()) {
        return true;
    }
    let guard = EXTRA_PASSWORDS.read().unwrap();
    guard.as_ref().is_some_and(|set| set.contains(&lower))
}

/// Resets the loaded extras for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = EXTRA_PASSWORDS.write().unwrap();
    *guard = None;
}
