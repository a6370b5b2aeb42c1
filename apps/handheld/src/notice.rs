//! # User-Facing Notices
//!
//! The single shape every screen uses to tell the user something happened.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow to the User                             │
//! │                                                                         │
//! │  ValidationError ──┐                                                    │
//! │                    ├──► Notice { kind, message } ──► blocking alert     │
//! │  ApiError ─────────┘         │                                          │
//! │                              └──► screen clears its loading flag        │
//! │                                   so the user can retry manually        │
//! │                                                                         │
//! │  Server messages are shown VERBATIM when the response body carried      │
//! │  one; everything else gets the error's own description. Nothing is      │
//! │  fatal to the process.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use karyana_api::ApiError;
use karyana_core::ValidationError;

/// How the rendering shell should present a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something went wrong; blocks until dismissed.
    Error,
    /// An action completed; informational.
    Success,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Backend and storage failures.
///
/// `ApiError::Status` already carries the server's `message` verbatim when
/// one was present, so its Display output is exactly what the user sees.
/// Authentication failures get an explicit hint that signing in again is
/// the remedy; there is no automatic re-login.
impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        if err.is_auth_failure() {
            return Notice::error(format!("{err}. Please sign in again."));
        }
        Notice::error(err.to_string())
    }
}

impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Notice::from(&err)
    }
}

/// Client-side validation failures; these block the call before anything
/// is transmitted.
impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Notice::error(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_passes_through_verbatim() {
        let err = ApiError::Status {
            status: 404,
            message: "Product not found".to_string(),
        };
        let notice = Notice::from(&err);
        assert_eq!(notice.message, "Product not found");
        assert!(notice.is_error());
    }

    #[test]
    fn test_auth_failure_adds_sign_in_hint() {
        let notice = Notice::from(&ApiError::MissingToken);
        assert!(notice.message.contains("sign in again"));

        let notice = Notice::from(&ApiError::Status {
            status: 401,
            message: "Not authorized, token failed".to_string(),
        });
        assert!(notice.message.starts_with("Not authorized, token failed"));
        assert!(notice.message.contains("sign in again"));
    }

    #[test]
    fn test_validation_error_maps_to_its_message() {
        let notice = Notice::from(ValidationError::Required { field: "price" });
        assert_eq!(notice.message, "price is required");
    }
}
