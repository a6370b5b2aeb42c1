//! # Auth Client
//!
//! Register/login against the backend and keep the credential store in
//! step with the outcome.
//!
//! ## Session Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Auth Client Contract                             │
//! │                                                                         │
//! │  register/login                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /auth/{register|login}                                            │
//! │       │                                                                 │
//! │       ├── non-2xx ──► ApiError::Status, store untouched                 │
//! │       │                                                                 │
//! │       ├── 2xx, no token ──► body returned, store untouched              │
//! │       │                                                                 │
//! │       └── 2xx with token ──► store.save(token + profile pair)           │
//! │                              body returned                              │
//! │                                                                         │
//! │  logout ──► store.clear() only. The backend is NOT called; the token    │
//! │             stays valid server-side until natural expiry.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use karyana_core::{AuthResponse, Credentials};

use crate::config::ApiConfig;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};
use crate::http::read_json;
use crate::ports::AuthApi;

const REGISTER_PATH: &str = "/auth/register";
const LOGIN_PATH: &str = "/auth/login";

/// Client for the auth endpoint family.
pub struct AuthClient {
    http: Client,
    config: ApiConfig,
    store: Arc<CredentialStore>,
}

impl AuthClient {
    /// Creates the client on a shared HTTP client.
    pub fn new(http: Client, config: ApiConfig, store: Arc<CredentialStore>) -> Self {
        AuthClient {
            http,
            config,
            store,
        }
    }

    /// Builds the client with its own HTTP client (standalone use).
    pub fn connect(config: ApiConfig, store: Arc<CredentialStore>) -> ApiResult<Self> {
        let http = config.http_client()?;
        Ok(Self::new(http, config, store))
    }

    /// Posts credentials to an auth endpoint and persists the session if
    /// the body carries a token.
    ///
    /// The store is written only AFTER the token is confirmed present, so
    /// a failed call never leaves partial session state behind.
    async fn submit(&self, path: &str, credentials: &Credentials) -> ApiResult<AuthResponse> {
        debug!(path, email = %credentials.email, "Submitting credentials");

        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let body: AuthResponse = read_json(response).await?;

        if let Some(session) = body.session() {
            self.store.save(&session)?;
            info!(user = %session.user.name, "Signed in, session persisted");
        } else {
            debug!(path, "Response carried no token, store untouched");
        }

        Ok(body)
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn register(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.submit(REGISTER_PATH, credentials).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.submit(LOGIN_PATH, credentials).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.store.clear()?;
        info!("Signed out, stored session cleared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
