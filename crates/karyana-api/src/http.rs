//! Shared HTTP plumbing: bearer lookup, JSON body decoding, and the
//! non-2xx to [`ApiError`] mapping used by every endpoint call.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};

/// Reads the bearer token fresh from the store, failing fast when absent.
///
/// Called at the top of every authenticated request so no header outlives
/// a logout.
pub(crate) fn bearer_token(store: &CredentialStore) -> ApiResult<String> {
    store.token().ok_or(ApiError::MissingToken)
}

/// Decodes a JSON body after the status check.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Status check for calls whose response body is discarded.
pub(crate) async fn read_unit(response: Response) -> ApiResult<()> {
    check_status(response).await.map(|_| ())
}

/// Turns a non-success response into [`ApiError::Status`], draining the
/// body for its `message` field first.
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    Err(status_error(status, &body))
}

/// Builds the user-visible error for a failed status.
///
/// The backend replies with `{"message": "..."}` on handled failures; that
/// text is surfaced verbatim. Anything else falls back to the status code.
pub(crate) fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let message = extract_message(body)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// The `message` field of a JSON error body, when there is one.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        return None;
    }
    Some(message.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_surfaced_verbatim() {
        let err = status_error(
            StatusCode::NOT_FOUND,
            br#"{"message":"Product not found"}"#,
        );
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Product not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = status_error(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Request failed with status 502");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_without_message_falls_back() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error":"boom"}"#);
        match err {
            ApiError::Status { message, .. } => {
                assert_eq!(message, "Request failed with status 500");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_message_falls_back() {
        let err = status_error(StatusCode::BAD_REQUEST, br#"{"message":"   "}"#);
        match err {
            ApiError::Status { message, .. } => {
                assert_eq!(message, "Request failed with status 400");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_token_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::at(dir.path().to_path_buf());
        assert!(matches!(bearer_token(&store), Err(ApiError::MissingToken)));
    }
}
