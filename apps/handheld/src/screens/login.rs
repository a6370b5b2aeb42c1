//! # Login / Register Screen
//!
//! Field state for the two auth forms plus the submit flow. A successful
//! submit hands the profile to the session gate and resets navigation into
//! the authenticated area; the user cannot navigate back to this screen
//! afterwards.

use std::sync::Arc;

use tracing::debug;

use karyana_api::AuthApi;
use karyana_core::validation::{validate_login_form, validate_register_form};
use karyana_core::Credentials;

use crate::gate::SessionGate;
use crate::nav::NavStack;
use crate::notice::Notice;

/// Which auth form is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    Register,
}

/// Controller for the login and registration forms.
pub struct LoginScreen {
    auth: Arc<dyn AuthApi>,
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    submitting: bool,
    notice: Option<Notice>,
}

impl LoginScreen {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        LoginScreen {
            auth,
            mode: AuthMode::SignIn,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            submitting: false,
            notice: None,
        }
    }

    /// Switches between the sign-in and register forms, dropping any
    /// stale notice.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The blocking notice to render, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Submits the current form.
    ///
    /// Validation failures block the call entirely. On success the gate is
    /// established and navigation resets into the authenticated area;
    /// returns whether the user is now signed in.
    pub async fn submit(&mut self, gate: &mut SessionGate, nav: &mut NavStack) -> bool {
        let credentials = match self.mode {
            AuthMode::SignIn => Credentials::login(self.email.trim(), self.password.clone()),
            AuthMode::Register => Credentials::register(
                self.name.trim(),
                self.email.trim(),
                self.password.clone(),
            ),
        };

        let validation = match self.mode {
            AuthMode::SignIn => validate_login_form(&credentials),
            AuthMode::Register => validate_register_form(&credentials),
        };
        if let Err(err) = validation {
            self.notice = Some(Notice::from(err));
            return false;
        }

        self.submitting = true;
        self.notice = None;
        debug!(mode = ?self.mode, "Submitting auth form");

        let result = match self.mode {
            AuthMode::SignIn => self.auth.login(&credentials).await,
            AuthMode::Register => self.auth.register(&credentials).await,
        };
        self.submitting = false;

        match result {
            Ok(body) => match body.session() {
                Some(session) => {
                    gate.establish(session.user);
                    nav.reset_to_home();
                    self.password.clear();
                    true
                }
                None => {
                    // 2xx without a token: the account may exist but there
                    // is no session to enter with.
                    self.notice =
                        Some(Notice::error("The server did not return a session"));
                    false
                }
            },
            Err(err) => {
                self.notice = Some(Notice::from(&err));
                false
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
