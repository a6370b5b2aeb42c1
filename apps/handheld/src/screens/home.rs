//! # Home Screen
//!
//! The landing screen of the authenticated area: greets the cashier by the
//! cached profile name and fans out to the other screens. Logout lives
//! here and drives the gate transition plus the history reset.

use std::sync::Arc;

use tracing::warn;

use karyana_api::{AuthApi, CredentialStore};
use karyana_core::UserProfile;

use crate::gate::SessionGate;
use crate::nav::{NavError, NavStack, Route};
use crate::notice::Notice;

/// Controller for the home screen.
pub struct HomeScreen {
    store: Arc<CredentialStore>,
    auth: Arc<dyn AuthApi>,
    profile: Option<UserProfile>,
    notice: Option<Notice>,
}

impl HomeScreen {
    pub fn new(store: Arc<CredentialStore>, auth: Arc<dyn AuthApi>) -> Self {
        HomeScreen {
            store,
            auth,
            profile: None,
            notice: None,
        }
    }

    /// Loads the cached profile for the greeting. Storage only, no
    /// network.
    pub fn mount(&mut self) {
        self.profile = self.store.load().map(|session| session.user);
    }

    /// Re-entry hook; same cheap storage read as mount.
    pub fn reload(&mut self) {
        self.mount();
    }

    /// Greeting line for the header.
    pub fn greeting(&self) -> String {
        match &self.profile {
            Some(profile) if !profile.name.is_empty() => {
                format!("Welcome, {}!", profile.name)
            }
            _ => "Welcome!".to_string(),
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn open_products(&self, nav: &mut NavStack) -> Result<(), NavError> {
        nav.push(Route::Products)
    }

    pub fn open_quick_add(&self, nav: &mut NavStack) -> Result<(), NavError> {
        nav.push(Route::QuickAdd)
    }

    pub fn open_sales_history(&self, nav: &mut NavStack) -> Result<(), NavError> {
        nav.push(Route::SalesHistory)
    }

    /// Logs out: clears the stored pair, flips the gate, resets navigation
    /// so back cannot reach the authenticated area.
    pub async fn logout(&mut self, gate: &mut SessionGate, nav: &mut NavStack) {
        match gate.sign_out(self.auth.as_ref()).await {
            Ok(()) => {
                self.profile = None;
                nav.reset_to_login();
            }
            Err(err) => {
                // Storage refused to clear; stay signed in rather than
                // strand the UI in a half-logged-out state.
                warn!(?err, "Logout failed");
                self.notice = Some(Notice::from(&err));
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gate::GateState;
    use crate::testing::{temp_store, FakeAuth};
    use karyana_core::Session;

    fn signed_in_fixtures() -> (Arc<FakeAuth>, SessionGate, NavStack) {
        let (guard, store) = temp_store();
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
        let auth = Arc::new(FakeAuth::new(store, guard));
        let mut gate = SessionGate::new(auth.store());
        gate.resolve();
        let nav = NavStack::from_gate(gate.state());
        (auth, gate, nav)
    }

    #[test]
    fn test_greeting_uses_cached_profile() {
        let (auth, _gate, _nav) = signed_in_fixtures();
        let mut screen = HomeScreen::new(auth.store(), auth.clone());
        screen.mount();
        assert_eq!(screen.greeting(), "Welcome, Asif!");
    }

    #[test]
    fn test_greeting_without_profile_is_generic() {
        let (guard, store) = temp_store();
        let auth = Arc::new(FakeAuth::new(store, guard));
        let mut screen = HomeScreen::new(auth.store(), auth.clone());
        screen.mount();
        assert_eq!(screen.greeting(), "Welcome!");
    }

    #[tokio::test]
    async fn test_logout_transitions_gate_and_resets_history() {
        let (auth, mut gate, mut nav) = signed_in_fixtures();
        let mut screen = HomeScreen::new(auth.store(), auth.clone());
        screen.mount();
        screen.open_products(&mut nav).unwrap();

        screen.logout(&mut gate, &mut nav).await;

        assert_eq!(*gate.state(), GateState::Unauthenticated);
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.pop(), None);
        assert!(auth.store().load().is_none());
    }
}
