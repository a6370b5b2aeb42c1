//! # Navigation Model
//!
//! Routes and the history stack, decoupled from any UI framework.
//!
//! ## Area Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Navigation Areas                                  │
//! │                                                                         │
//! │  Login area                  Authenticated area                         │
//! │  ┌──────────┐                ┌──────┐  ┌──────────┐  ┌──────────┐      │
//! │  │  Login   │                │ Home │──│ Products │──│ QuickAdd │      │
//! │  │ Register │                │      │──│ History  │  └──────────┘      │
//! │  └──────────┘                └──────┘  └──────────┘                     │
//! │                                                                         │
//! │  • crossing between areas ONLY happens through a gate transition        │
//! │    (login success or logout), never through push/pop                    │
//! │  • logout resets history to [Login]; back cannot reach the old area     │
//! │  • pop() hands back the re-entered route; the shell MUST call that      │
//! │    screen's reload() since no client-side cache exists                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tracing::{debug, warn};

use crate::gate::GateState;

/// The screens a shell can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Products,
    QuickAdd,
    SalesHistory,
}

impl Route {
    /// Whether this route lives in the authenticated area.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

/// Refused navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("route is only reachable after signing in")]
    NeedsSession,
    #[error("login screens are unreachable while signed in; log out first")]
    AlreadySignedIn,
}

/// Navigation history with the area rules enforced.
#[derive(Debug)]
pub struct NavStack {
    stack: Vec<Route>,
    authenticated: bool,
}

impl NavStack {
    /// Seeds history from the resolved session gate.
    ///
    /// A `Checking` gate seeds the login area; callers resolve the gate
    /// before building navigation, so that arm is a conservative default.
    pub fn from_gate(gate: &GateState) -> Self {
        let authenticated = matches!(gate, GateState::Authenticated(_));
        let initial = if authenticated {
            Route::Home
        } else {
            Route::Login
        };
        debug!(?initial, "Navigation seeded");
        NavStack {
            stack: vec![initial],
            authenticated,
        }
    }

    /// The route currently on screen.
    pub fn current(&self) -> Route {
        // The stack is never empty: resets replace its contents wholesale.
        *self.stack.last().expect("navigation stack is never empty")
    }

    /// Pushes a route, enforcing the area rules.
    pub fn push(&mut self, route: Route) -> Result<(), NavError> {
        if route.requires_session() && !self.authenticated {
            warn!(?route, "Blocked navigation into the authenticated area");
            return Err(NavError::NeedsSession);
        }
        if !route.requires_session() && self.authenticated {
            warn!(?route, "Blocked navigation back into the login area");
            return Err(NavError::AlreadySignedIn);
        }
        self.stack.push(route);
        Ok(())
    }

    /// Navigates back.
    ///
    /// Returns the route being re-entered, if any; the shell must invoke
    /// that screen's `reload()` because screens never cache across visits.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        let current = self.current();
        debug!(?current, "Navigated back, screen must reload");
        Some(current)
    }

    /// Login or registration succeeded: enter the authenticated area with
    /// fresh history.
    pub fn reset_to_home(&mut self) {
        self.authenticated = true;
        self.stack.clear();
        self.stack.push(Route::Home);
    }

    /// Logout: drop every authenticated entry so back-navigation cannot
    /// reach the old area.
    pub fn reset_to_login(&mut self) {
        self.authenticated = false;
        self.stack.clear();
        self.stack.push(Route::Login);
    }

    /// Switches between the login and register screens (both live in the
    /// login area).
    pub fn show_auth_screen(&mut self, route: Route) -> Result<(), NavError> {
        if route.requires_session() {
            return Err(NavError::NeedsSession);
        }
        if self.authenticated {
            return Err(NavError::AlreadySignedIn);
        }
        self.stack.clear();
        self.stack.push(route);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use karyana_core::UserProfile;

    fn profile() -> UserProfile {
        UserProfile {
            id: Some("u1".to_string()),
            name: "Asif".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_gate_seeds_landing_route() {
        let nav = NavStack::from_gate(&GateState::Authenticated(profile()));
        assert_eq!(nav.current(), Route::Home);

        let nav = NavStack::from_gate(&GateState::Unauthenticated);
        assert_eq!(nav.current(), Route::Login);
    }

    #[test]
    fn test_authenticated_area_blocks_login_push() {
        let mut nav = NavStack::from_gate(&GateState::Authenticated(profile()));
        assert_eq!(nav.push(Route::Login), Err(NavError::AlreadySignedIn));
        assert_eq!(nav.current(), Route::Home);
    }

    #[test]
    fn test_login_area_blocks_authenticated_push() {
        let mut nav = NavStack::from_gate(&GateState::Unauthenticated);
        assert_eq!(nav.push(Route::Products), Err(NavError::NeedsSession));
        assert_eq!(nav.current(), Route::Login);
    }

    #[test]
    fn test_pop_reports_reentered_route() {
        let mut nav = NavStack::from_gate(&GateState::Authenticated(profile()));
        nav.push(Route::Products).unwrap();
        nav.push(Route::QuickAdd).unwrap();

        assert_eq!(nav.pop(), Some(Route::Products));
        assert_eq!(nav.current(), Route::Products);
    }

    #[test]
    fn test_back_from_root_goes_nowhere() {
        let mut nav = NavStack::from_gate(&GateState::Unauthenticated);
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), Route::Login);
    }

    #[test]
    fn test_logout_clears_history() {
        let mut nav = NavStack::from_gate(&GateState::Authenticated(profile()));
        nav.push(Route::Products).unwrap();
        nav.push(Route::SalesHistory).unwrap();

        nav.reset_to_login();
        assert_eq!(nav.current(), Route::Login);
        // The authenticated area is gone from history entirely.
        assert_eq!(nav.pop(), None);
    }

    #[test]
    fn test_login_success_resets_into_home() {
        let mut nav = NavStack::from_gate(&GateState::Unauthenticated);
        nav.show_auth_screen(Route::Register).unwrap();

        nav.reset_to_home();
        assert_eq!(nav.current(), Route::Home);
        // No login screen left behind the home screen.
        assert_eq!(nav.pop(), None);
    }
}
