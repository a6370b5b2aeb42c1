//! # Karyana Handheld Library
//!
//! Core library for the Karyana POS handheld client. This is the main
//! entry point that boots the app and owns the screen controllers a
//! rendering shell drives.
//!
//! ## Module Organization
//! ```text
//! karyana_handheld/
//! ├── lib.rs            ◄─── You are here (bootstrap & wiring)
//! ├── gate.rs           ◄─── One-shot session gate
//! ├── nav.rs            ◄─── Routes + history with area rules
//! ├── notice.rs         ◄─── Error -> user-facing message mapping
//! └── screens/
//!     ├── mod.rs        ◄─── Shared ViewState + exports
//!     ├── login.rs      ◄─── Login/registration forms
//!     ├── home.rs       ◄─── Greeting + fan-out + logout
//!     ├── products.rs   ◄─── Inventory list, edit, two-step delete
//!     ├── quick_add.rs  ◄─── Category multi-select + batch save
//!     └── history.rs    ◄─── Read-only sales history
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • KARYANA_API_URL (base URL of the backend)                         │
//! │     • KARYANA_HTTP_TIMEOUT_SECS (request timeout)                       │
//! │                                                                         │
//! │  3. Open Credential Store ────────────────────────────────────────────► │
//! │     • Per-platform data directory                                       │
//! │     • Token + profile pair, tolerant of corruption                      │
//! │                                                                         │
//! │  4. Build API Clients ────────────────────────────────────────────────► │
//! │     • One shared HTTP client, cloned into auth/inventory/sales          │
//! │                                                                         │
//! │  5. Resolve Session Gate ─────────────────────────────────────────────► │
//! │     • Stored session -> Home, none/corrupt -> Login                     │
//! │     • Navigation history seeded accordingly                             │
//! │                                                                         │
//! │  6. Hand off to the rendering shell ──────────────────────────────────► │
//! │     • The shell renders App screens and awaits their actions            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod gate;
pub mod nav;
pub mod notice;
pub mod screens;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use karyana_api::{
    ApiConfig, ApiError, AuthApi, AuthClient, CredentialStore, InventoryApi, InventoryClient,
    SalesApi, SalesClient,
};

use crate::gate::SessionGate;
use crate::nav::NavStack;
use crate::screens::{
    HomeScreen, LoginScreen, ProductsScreen, QuickAddScreen, SalesHistoryScreen,
};

/// Errors that can abort startup.
///
/// Note that a missing or corrupt stored session is NOT one of them; that
/// case routes to the login screen instead.
#[derive(Debug, Error)]
pub enum BootError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The assembled application: clients, gate, navigation.
///
/// The rendering shell constructs screens through the factory methods,
/// renders their snapshot state, and awaits their action methods. On
/// back-navigation it must call the re-entered screen's `reload()`.
pub struct App {
    pub store: Arc<CredentialStore>,
    pub auth: Arc<dyn AuthApi>,
    pub inventory: Arc<dyn InventoryApi>,
    pub sales: Arc<dyn SalesApi>,
    pub gate: SessionGate,
    pub nav: NavStack,
}

impl App {
    /// Wires clients and resolves the session gate.
    ///
    /// The gate decides the landing area exactly once here; afterwards
    /// only login success or logout moves it.
    pub fn bootstrap(config: ApiConfig, store: Arc<CredentialStore>) -> Result<Self, BootError> {
        let http = config.http_client()?;

        let auth: Arc<dyn AuthApi> = Arc::new(AuthClient::new(
            http.clone(),
            config.clone(),
            Arc::clone(&store),
        ));
        let inventory: Arc<dyn InventoryApi> = Arc::new(InventoryClient::new(
            http.clone(),
            config.clone(),
            Arc::clone(&store),
        ));
        let sales: Arc<dyn SalesApi> =
            Arc::new(SalesClient::new(http, config, Arc::clone(&store)));

        let mut gate = SessionGate::new(Arc::clone(&store));
        gate.resolve();
        let nav = NavStack::from_gate(gate.state());

        Ok(App {
            store,
            auth,
            inventory,
            sales,
            gate,
            nav,
        })
    }

    // -------------------------------------------------------------------------
    // Screen factories
    // -------------------------------------------------------------------------
    // Screens are rebuilt per visit; they hold no state worth keeping
    // across navigation because every entry refetches anyway.

    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(Arc::clone(&self.auth))
    }

    pub fn home_screen(&self) -> HomeScreen {
        HomeScreen::new(Arc::clone(&self.store), Arc::clone(&self.auth))
    }

    pub fn products_screen(&self) -> ProductsScreen {
        ProductsScreen::new(Arc::clone(&self.inventory))
    }

    pub fn quick_add_screen(&self) -> QuickAddScreen {
        QuickAddScreen::new(Arc::clone(&self.inventory))
    }

    pub fn sales_history_screen(&self) -> SalesHistoryScreen {
        SalesHistoryScreen::new(Arc::clone(&self.sales))
    }
}

/// Initializes tracing (logging).
///
/// Default level is INFO; override with RUST_LOG.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Boots the application: logging, configuration, credential store,
/// clients, session gate. Returns the assembled [`App`] for the rendering
/// shell to drive.
pub fn run() -> Result<App, BootError> {
    init_tracing();
    info!("Starting Karyana POS handheld client");

    let config = ApiConfig::from_env_or(None)?;
    info!(base_url = %config.base_url(), "Backend configured");

    let store = Arc::new(CredentialStore::open_default()?);
    let app = App::bootstrap(config, store)?;

    info!(route = ?app.nav.current(), "Session gate resolved");
    Ok(app)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::nav::Route;
    use karyana_core::{Session, UserProfile};

    fn config() -> ApiConfig {
        ApiConfig::new("http://localhost:5000/api").unwrap()
    }

    #[test]
    fn test_bootstrap_without_session_lands_on_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CredentialStore::at(dir.path().to_path_buf()));

        let app = App::bootstrap(config(), store).unwrap();
        assert_eq!(app.nav.current(), Route::Login);
        assert!(!app.gate.is_authenticated());
    }

    #[test]
    fn test_bootstrap_with_session_lands_on_home() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(CredentialStore::at(dir.path().to_path_buf()));
        store
            .save(&Session {
                token: "jwt".to_string(),
                user: UserProfile {
                    id: Some("u1".to_string()),
                    name: "Asif".to_string(),
                    email: None,
                },
            })
            .unwrap();

        let app = App::bootstrap(config(), store).unwrap();
        assert_eq!(app.nav.current(), Route::Home);
        assert!(app.gate.is_authenticated());
    }
}
