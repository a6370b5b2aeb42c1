//! # Session Gate
//!
//! Decides, once at process start, whether the user lands in the
//! authenticated area or on the login screen.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Gate                                     │
//! │                                                                         │
//! │                      ┌──────────┐                                       │
//! │                      │ Checking │  (initial; store not read yet)        │
//! │                      └────┬─────┘                                       │
//! │            resolve()      │                                             │
//! │          ┌────────────────┴────────────────┐                            │
//! │          ▼                                 ▼                            │
//! │  ┌───────────────┐                ┌─────────────────┐                   │
//! │  │ Authenticated │                │ Unauthenticated │                   │
//! │  │ (profile)     │                │                 │                   │
//! │  └──────┬────────┘                └────────▲────────┘                   │
//! │         │            sign_out()            │                            │
//! │         └──────────────────────────────────┘                            │
//! │                                                                         │
//! │  • resolve() is ONE-SHOT: later calls never re-read the store           │
//! │    (no re-check on backgrounding)                                       │
//! │  • a missing OR corrupt stored session both land in Unauthenticated,    │
//! │    never a failure                                                      │
//! │  • establish() is driven by a successful login/register                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;

use karyana_api::{ApiResult, AuthApi, CredentialStore};
use karyana_core::UserProfile;

/// Where the gate currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum GateState {
    /// Initial state; the credential store has not been consulted yet.
    Checking,
    /// A stored session with a profile was found.
    Authenticated(UserProfile),
    /// No usable stored session.
    Unauthenticated,
}

/// The one-shot session gate.
pub struct SessionGate {
    store: Arc<CredentialStore>,
    state: GateState,
}

impl SessionGate {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        SessionGate {
            store,
            state: GateState::Checking,
        }
    }

    /// Reads the credential store and settles the gate.
    ///
    /// Only the first call consults the store; afterwards the gate moves
    /// exclusively through [`SessionGate::establish`] and
    /// [`SessionGate::sign_out`].
    pub fn resolve(&mut self) -> &GateState {
        if self.state == GateState::Checking {
            self.state = match self.store.load() {
                Some(session) => {
                    info!(user = %session.user.name, "Stored session found");
                    GateState::Authenticated(session.user)
                }
                None => {
                    info!("No stored session, routing to login");
                    GateState::Unauthenticated
                }
            };
        }
        &self.state
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GateState::Authenticated(_))
    }

    /// Moves the gate into the authenticated area after a successful
    /// login or registration.
    pub fn establish(&mut self, profile: UserProfile) {
        info!(user = %profile.name, "Session established");
        self.state = GateState::Authenticated(profile);
    }

    /// Logs out: clears the stored pair and drops back to the login area.
    ///
    /// The navigation layer must reset its history alongside this call so
    /// the authenticated area is unreachable via back-navigation.
    pub async fn sign_out(&mut self, auth: &dyn AuthApi) -> ApiResult<()> {
        auth.logout().await?;
        self.state = GateState::Unauthenticated;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
