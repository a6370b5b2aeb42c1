//! # Credential Store
//!
//! Persistent session storage: the bearer token and the cached user profile,
//! kept as a pair of files in the per-platform data directory.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Credential Storage                                 │
//! │                                                                         │
//! │  <data dir>/                                                            │
//! │  ├── token          raw bearer token                                    │
//! │  └── user.json      serialized user profile                             │
//! │                                                                         │
//! │  macOS:   ~/Library/Application Support/pk.karyana.pos/                 │
//! │  Windows: %APPDATA%/karyana/pos/data/                                   │
//! │  Linux:   ~/.local/share/karyanapos/                                    │
//! │                                                                         │
//! │  INVARIANT: the two entries are written and cleared as a pair.          │
//! │  `load` demands both; a half-written pair reads as "no session".        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Tolerance
//! `load` never fails the caller: a missing or corrupt entry is logged and
//! reported as absence, which routes the user to the login screen instead
//! of wedging startup.
//!
//! One process, single reader/writer; no locking needed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, warn};

use karyana_core::{Session, UserProfile};

use crate::error::{ApiError, ApiResult};

/// File holding the raw bearer token.
const TOKEN_FILE: &str = "token";

/// File holding the serialized user profile.
const USER_FILE: &str = "user.json";

/// Persistent token + profile pair.
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    /// Opens the store at the platform's data directory for this app.
    pub fn open_default() -> ApiResult<Self> {
        let dirs = ProjectDirs::from("pk", "karyana", "pos")
            .ok_or_else(|| ApiError::Storage("no home directory available".to_string()))?;
        Ok(Self::at(dirs.data_dir().to_path_buf()))
    }

    /// Opens the store at an explicit directory. Used by tests and by
    /// deployments that pin the data location.
    pub fn at(dir: PathBuf) -> Self {
        CredentialStore { dir }
    }

    /// Persists the session: token and profile together.
    ///
    /// Each entry is written to a temporary file and renamed into place, so
    /// a crash mid-save never leaves a torn entry. If only one of the two
    /// lands, `load` treats the pair as absent.
    pub fn save(&self, session: &Session) -> ApiResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| ApiError::Storage(format!("create {}: {e}", self.dir.display())))?;

        let profile = serde_json::to_vec_pretty(&session.user)
            .map_err(|e| ApiError::Storage(format!("encode profile: {e}")))?;

        write_replace(&self.dir.join(TOKEN_FILE), session.token.as_bytes())
            .map_err(|e| ApiError::Storage(format!("write token: {e}")))?;
        write_replace(&self.dir.join(USER_FILE), &profile)
            .map_err(|e| ApiError::Storage(format!("write profile: {e}")))?;

        debug!(dir = %self.dir.display(), "Session persisted");
        Ok(())
    }

    /// Reads the stored session, if a complete and intact pair exists.
    ///
    /// Missing entries mean no session. A corrupt profile is logged and
    /// also reported as no session; it is overwritten by the next login.
    pub fn load(&self) -> Option<Session> {
        let token = match fs::read_to_string(self.dir.join(TOKEN_FILE)) {
            Ok(token) if !token.trim().is_empty() => token.trim().to_string(),
            Ok(_) => {
                warn!("Stored token is empty, treating as signed out");
                return None;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(?e, "Could not read stored token, treating as signed out");
                return None;
            }
        };

        let user: UserProfile = match fs::read(self.dir.join(USER_FILE)) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(user) => user,
                Err(e) => {
                    warn!(?e, "Stored profile is corrupt, treating as signed out");
                    return None;
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(?e, "Could not read stored profile, treating as signed out");
                return None;
            }
        };

        Some(Session { token, user })
    }

    /// The stored bearer token, if any.
    ///
    /// Clients call this on every request so a logout between calls is
    /// picked up immediately; the token is never cached in a header.
    pub fn token(&self) -> Option<String> {
        self.load().map(|session| session.token)
    }

    /// Removes both entries. Idempotent; missing files are fine.
    pub fn clear(&self) -> ApiResult<()> {
        for name in [TOKEN_FILE, USER_FILE] {
            match fs::remove_file(self.dir.join(name)) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(ApiError::Storage(format!("remove {name}: {e}"))),
            }
        }
        debug!("Stored session cleared");
        Ok(())
    }
}

/// Write-then-rename so readers never observe a partial file.
fn write_replace(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

// =============================================================================
// Unit Tests
// =============================================================================
