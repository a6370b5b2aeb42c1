//! # karyana-api: Backend Access for Karyana POS
//!
//! HTTP clients for the remote backend plus the on-device credential store.
//! All business state lives server-side; this crate is strictly
//! request/response plumbing with typed bodies.
//!
//! ## Modules
//!
//! - [`config`] - API base URL and timeouts, environment-driven
//! - [`credentials`] - Persistent token + profile pair
//! - [`ports`] - `AuthApi` / `InventoryApi` / `SalesApi` traits
//! - [`auth`] - Register/login/logout against the auth endpoints
//! - [`inventory`] - Product CRUD, low-stock report, pre-built catalogs
//! - [`sales`] - Sale recording and history
//! - [`error`] - API error taxonomy
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Flow                                    │
//! │                                                                         │
//! │  login/register ──► token in body? ──► CredentialStore.save(pair)      │
//! │                                                                         │
//! │  inventory/sales call ──► CredentialStore.token() ──► bearer header    │
//! │        (read fresh on EVERY call; the header is never cached)          │
//! │                                                                         │
//! │  logout ──► CredentialStore.clear() (no backend call; the token        │
//! │             stays valid server-side until natural expiry)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cancellation
//! Every client method is a plain future. Dropping it aborts the underlying
//! HTTP request, so a discarded screen leaks nothing; the explicit request
//! timeout on the shared client bounds the rest.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
mod http;
pub mod inventory;
pub mod ports;
pub mod sales;

pub use auth::AuthClient;
pub use config::ApiConfig;
pub use credentials::CredentialStore;
pub use error::{ApiError, ApiResult};
pub use inventory::InventoryClient;
pub use ports::{AuthApi, InventoryApi, SalesApi};
pub use sales::SalesClient;
