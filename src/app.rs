//! Application state and core logic

use crate::platform::PASTE_MODIFIER;
use crate::session::Session;
use crate::state::{AppState, SubmitOutcome, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Session backend
    session: Box<dyn Session>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback message for the status bar
    pub status_message: Option<String>,
    /// Mask the password field while typing
    mask_password: bool,
}

impl App {
    /// Create a new App instance
    ///
    /// The restored session decides the starting view: logged-in users land
    /// on Home, everyone else on the login form.
    pub fn new(session: Box<dyn Session>, quiet_interval: Duration, mask_password: bool) -> Self {
        let state = AppState::new(quiet_interval, session.is_logged_in());
        Self {
            state,
            session,
            quit: false,
            status_message: None,
            mask_password,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a user is currently logged in
    pub fn logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Whether the password field is masked
    pub fn mask_password(&self) -> bool {
        self.mask_password
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Advance time-based state; called once per event-loop turn
    pub fn tick(&mut self, now: Instant) {
        if let Some(form) = self.state.login_form.as_mut() {
            if let Some(form_valid) = form.poll_validity(now) {
                tracing::debug!("Form validity committed: {form_valid}");
            }
        }
    }

    /// Deadline of the scheduled validity check, if any
    ///
    /// The event loop caps its poll timeout at this deadline so a commit
    /// never waits for the next input event.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state
            .login_form
            .as_ref()
            .and_then(|form| form.check_deadline())
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Login => self.handle_login_key(key, now).await?,
            View::Home => self.handle_home_key(key).await?,
        }

        Ok(())
    }

    /// Handle a key event on the login view
    async fn handle_login_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        let Some(form) = self.state.login_form.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(now),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(now),
            KeyCode::Enter => self.submit_login().await?,
            KeyCode::Esc => form.reset(),
            KeyCode::Backspace => form.backspace(now),
            KeyCode::Char('v') if key.modifiers.contains(PASTE_MODIFIER) => {
                match Self::read_clipboard() {
                    Ok(text) => form.paste(&text, now),
                    Err(err) => self.push_error(format!("Clipboard read failed: {err}")),
                }
            }
            KeyCode::Char(c) => form.input_char(c, now),
            _ => {}
        }

        Ok(())
    }

    /// Handle a key event on the home view
    async fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('l') => self.logout().await?,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }

        Ok(())
    }

    /// Run the submit flow on the login form
    ///
    /// Only a committed form reaches the session. A rejected submit moves
    /// focus to the first field at fault; a failed login rolls the form
    /// back so the user can retry.
    async fn submit_login(&mut self) -> Result<()> {
        let Some(form) = self.state.login_form.as_mut() else {
            return Ok(());
        };

        match form.submit() {
            SubmitOutcome::Forwarded => {
                let email = form.email().value().to_string();
                let password = form.password().value().to_string();
                match self.session.login(&email, &password).await {
                    Ok(()) => {
                        self.state.show_home();
                        self.status_message = Some("Logged in".to_string());
                    }
                    Err(err) => {
                        if let Some(form) = self.state.login_form.as_mut() {
                            form.submit_failed();
                        }
                        self.push_error(format!("Login failed: {err}"));
                    }
                }
            }
            SubmitOutcome::RejectedFocusEmail | SubmitOutcome::RejectedFocusPassword => {
                tracing::debug!("Submit rejected, focus moved to first invalid field");
            }
            SubmitOutcome::Ignored => {}
        }

        Ok(())
    }

    /// End the session and return to a fresh login form
    async fn logout(&mut self) -> Result<()> {
        match self.session.logout().await {
            Ok(()) => {
                self.state.show_login();
                self.status_message = Some("Logged out".to_string());
            }
            Err(err) => self.push_error(format!("Logout failed: {err}")),
        }

        Ok(())
    }

    fn read_clipboard() -> Result<String> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }
}
