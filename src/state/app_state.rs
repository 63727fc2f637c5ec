//! Application state definitions

use std::collections::VecDeque;
use std::time::Duration;

use super::form::LoginForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Home,
}

/// Main application state
///
/// Invariant: `login_form` is `Some` exactly while the Login view is shown.
/// Entering Login constructs a fresh form; leaving drops it, and any pending
/// validity check goes with it.
pub struct AppState {
    /// Current view
    pub current_view: View,
    /// Login form, present exactly while the Login view is shown
    pub login_form: Option<LoginForm>,
    /// Quiet interval handed to every form this state constructs
    quiet_interval: Duration,
    /// Queued error messages, surfaced one at a time in a modal dialog
    errors: VecDeque<String>,
}

impl AppState {
    /// Build the initial state for a restored session: a logged-in user
    /// lands on Home, everyone else on a fresh login form.
    pub fn new(quiet_interval: Duration, logged_in: bool) -> Self {
        let mut state = Self {
            current_view: View::Home,
            login_form: None,
            quiet_interval,
            errors: VecDeque::new(),
        };
        if !logged_in {
            state.show_login();
        }
        state
    }

    /// Switch to the Login view with a fresh form
    pub fn show_login(&mut self) {
        self.current_view = View::Login;
        self.login_form = Some(LoginForm::new(self.quiet_interval));
    }

    /// Switch to the Home view, discarding the login form
    pub fn show_home(&mut self) {
        self.current_view = View::Home;
        self.login_form = None;
    }

    /// Queue an error message for display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    /// Whether an error dialog should be showing
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently on display, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently on display
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Validity;
    use std::time::Instant;

    const QUIET: Duration = Duration::from_millis(500);

    mod view_transitions {
        use super::*;

        #[test]
        fn test_logged_out_start_mounts_a_fresh_form() {
            let state = AppState::new(QUIET, false);
            assert_eq!(state.current_view, View::Login);
            let form = state.login_form.expect("form mounted on login view");
            assert_eq!(form.email().validity(), Validity::Uncomputed);
            assert_eq!(form.password().validity(), Validity::Uncomputed);
            assert!(!form.check_pending());
        }

        #[test]
        fn test_logged_in_start_goes_home_without_a_form() {
            let state = AppState::new(QUIET, true);
            assert_eq!(state.current_view, View::Home);
            assert!(state.login_form.is_none());
        }

        #[test]
        fn test_show_home_discards_the_form() {
            let mut state = AppState::new(QUIET, false);
            state.show_home();
            assert_eq!(state.current_view, View::Home);
            assert!(state.login_form.is_none());
        }

        #[test]
        fn test_show_login_always_gives_a_fresh_form() {
            let mut state = AppState::new(QUIET, false);
            let t0 = Instant::now();
            state.login_form.as_mut().unwrap().input_char('x', t0);

            state.show_home();
            state.show_login();

            let form = state.login_form.as_ref().unwrap();
            assert_eq!(form.email().value(), "");
            assert_eq!(form.email().validity(), Validity::Uncomputed);
            assert!(!form.check_pending());
        }
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_starts_empty() {
            let state = AppState::new(QUIET, false);
            assert!(!state.has_errors());
            assert!(state.current_error().is_none());
        }

        #[test]
        fn test_errors_dismiss_in_order() {
            let mut state = AppState::new(QUIET, false);
            state.push_error("first".to_string());
            state.push_error("second".to_string());

            assert!(state.has_errors());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_queue_is_a_noop() {
            let mut state = AppState::new(QUIET, false);
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
