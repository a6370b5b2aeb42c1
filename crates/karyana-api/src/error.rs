//! # API Error Types
//!
//! Error taxonomy for backend access.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │  Authentication │  │      Server             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Transport      │  │  MissingToken   │  │  Status {code, msg}     │ │
//! │  │  Timeout        │  │  Status 401/403 │  │  (msg verbatim when     │ │
//! │  └─────────────────┘  └─────────────────┘  │   the body carries one) │ │
//! │                                            └─────────────────────────┘ │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │    Decoding     │  │    Local        │                              │
//! │  │                 │  │                 │                              │
//! │  │  Decode         │  │  Storage        │                              │
//! │  └─────────────────┘  │  InvalidBaseUrl │                              │
//! │                       └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! - Each variant includes enough context for a user-visible message
//! - No automatic re-login or refresh: authentication failures surface as-is
//! - All errors are `Send + Sync` for async compatibility

use thiserror::Error;

/// Result type alias for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised by backend access.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, TLS).
    #[error("Could not reach the server: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("The server took too long to respond")]
    Timeout,

    /// An authenticated call was attempted with no stored token.
    ///
    /// Raised before any request is issued; the user must sign in again.
    #[error("Not signed in")]
    MissingToken,

    /// The server answered with a non-success status.
    ///
    /// `message` is the body's `message` field verbatim when present,
    /// otherwise a status-code fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success response carried a body this client could not decode.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    /// The credential files could not be written or removed.
    #[error("Could not update stored credentials: {0}")]
    Storage(String),

    /// The configured API base URL failed to parse.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Whether this error means the session is missing or rejected.
    ///
    /// There is no automatic re-login; callers surface these and leave the
    /// user to sign in again.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            ApiError::MissingToken => true,
            ApiError::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Maps a reqwest failure into the transport/timeout split.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
