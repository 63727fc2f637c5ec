//! Login form controller

use std::time::{Duration, Instant};

use super::field::{FieldEvent, FieldState, Validity};
use super::validity::FormValidity;

/// Which part of the login form holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Submit,
}

/// Result of a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Committed validity held; credentials go to the session.
    Forwarded,
    /// Form not committed valid and the email field is at fault (email
    /// wins when both are); focus moved there.
    RejectedFocusEmail,
    /// Email fine; focus moved to the password field.
    RejectedFocusPassword,
    /// A login has already been forwarded from this form.
    Ignored,
}

/// The login form: two field state machines, the debounced overall
/// validity, and the keyboard focus ring.
///
/// All editing goes through the field event machinery; after any event the
/// controller compares the tri-state validity pair against its previous
/// value and notifies the aggregator only when the pair actually changed.
/// An edit that leaves both validities as they were neither cancels nor
/// extends an in-flight check.
#[derive(Debug, Clone)]
pub struct LoginForm {
    email: FieldState,
    password: FieldState,
    validity: FormValidity,
    focus: LoginFocus,
    forwarded: bool,
}

impl LoginForm {
    /// Create a fresh form: both fields empty and uncomputed, nothing
    /// committed, focus on the email field.
    pub fn new(quiet_interval: Duration) -> Self {
        Self {
            email: FieldState::email(),
            password: FieldState::password(),
            validity: FormValidity::new(quiet_interval),
            focus: LoginFocus::Email,
            forwarded: false,
        }
    }

    pub fn email(&self) -> &FieldState {
        &self.email
    }

    pub fn password(&self) -> &FieldState {
        &self.password
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    /// Published overall validity (see [`FormValidity::committed`]).
    pub fn committed(&self) -> bool {
        self.validity.committed()
    }

    /// Whether a validity check is scheduled but not yet due.
    pub fn check_pending(&self) -> bool {
        self.validity.is_pending()
    }

    /// Deadline of the scheduled validity check, if any.
    pub fn check_deadline(&self) -> Option<Instant> {
        self.validity.deadline()
    }

    /// Tri-state validity pair, email first.
    pub fn validity_pair(&self) -> (Validity, Validity) {
        (self.email.validity(), self.password.validity())
    }

    fn form_valid_now(&self) -> bool {
        self.email.validity().is_valid() && self.password.validity().is_valid()
    }

    fn note_if_pair_changed(&mut self, before: (Validity, Validity), now: Instant) {
        if self.validity_pair() != before {
            self.validity.note_change(self.form_valid_now(), now);
        }
    }

    /// Apply an event to the email field.
    pub fn apply_email(&mut self, event: FieldEvent, now: Instant) {
        let before = self.validity_pair();
        self.email.apply(event);
        self.note_if_pair_changed(before, now);
    }

    /// Apply an event to the password field.
    pub fn apply_password(&mut self, event: FieldEvent, now: Instant) {
        let before = self.validity_pair();
        self.password.apply(event);
        self.note_if_pair_changed(before, now);
    }

    /// Type one character into the focused field. Ignored while the submit
    /// button has focus.
    pub fn input_char(&mut self, c: char, now: Instant) {
        let before = self.validity_pair();
        match self.focus {
            LoginFocus::Email => self.email.push_char(c),
            LoginFocus::Password => self.password.push_char(c),
            LoginFocus::Submit => return,
        }
        self.note_if_pair_changed(before, now);
    }

    /// Backspace in the focused field.
    pub fn backspace(&mut self, now: Instant) {
        let before = self.validity_pair();
        match self.focus {
            LoginFocus::Email => self.email.pop_char(),
            LoginFocus::Password => self.password.pop_char(),
            LoginFocus::Submit => return,
        }
        self.note_if_pair_changed(before, now);
    }

    /// Paste into the focused field. Only the first line of the pasted text
    /// is taken; trailing carriage returns are stripped.
    pub fn paste(&mut self, text: &str, now: Instant) {
        let line = text.lines().next().unwrap_or("");
        let before = self.validity_pair();
        match self.focus {
            LoginFocus::Email => self.email.push_str(line),
            LoginFocus::Password => self.password.push_str(line),
            LoginFocus::Submit => return,
        }
        self.note_if_pair_changed(before, now);
    }

    /// Move focus forward (Email → Password → Submit → Email), blurring the
    /// field being left.
    pub fn focus_next(&mut self, now: Instant) {
        self.blur_focused(now);
        self.focus = match self.focus {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::Email,
        };
    }

    /// Move focus backward, blurring the field being left.
    pub fn focus_prev(&mut self, now: Instant) {
        self.blur_focused(now);
        self.focus = match self.focus {
            LoginFocus::Email => LoginFocus::Submit,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Submit => LoginFocus::Password,
        };
    }

    fn blur_focused(&mut self, now: Instant) {
        match self.focus {
            LoginFocus::Email => self.apply_email(FieldEvent::Blur, now),
            LoginFocus::Password => self.apply_password(FieldEvent::Blur, now),
            LoginFocus::Submit => {}
        }
    }

    /// Move focus to the email field.
    pub fn focus_email(&mut self) {
        self.focus = LoginFocus::Email;
    }

    /// Move focus to the password field.
    pub fn focus_password(&mut self) {
        self.focus = LoginFocus::Password;
    }

    /// Commit the scheduled validity check if it has come due. Returns the
    /// newly committed value, if any.
    pub fn poll_validity(&mut self, now: Instant) -> Option<bool> {
        self.validity.poll(now)
    }

    /// Decide a submit request.
    ///
    /// Committed validity forwards; otherwise focus is redirected to the
    /// first field at fault, email checked first. Once forwarded, further
    /// submits are ignored until [`LoginForm::submit_failed`] or a reset.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.forwarded {
            return SubmitOutcome::Ignored;
        }
        if self.validity.committed() {
            self.forwarded = true;
            SubmitOutcome::Forwarded
        } else if !self.email.validity().is_valid() {
            self.focus_email();
            SubmitOutcome::RejectedFocusEmail
        } else {
            self.focus_password();
            SubmitOutcome::RejectedFocusPassword
        }
    }

    /// Roll back the forwarded mark after a failed login so the user can
    /// retry.
    pub fn submit_failed(&mut self) {
        self.forwarded = false;
    }

    /// Clear the form: both fields reset (empty, marked invalid), the
    /// aggregator back to its initial state, focus on email, any forwarded
    /// mark dropped.
    pub fn reset(&mut self) {
        self.email.apply(FieldEvent::Reset);
        self.password.apply(FieldEvent::Reset);
        self.validity.reset();
        self.focus = LoginFocus::Email;
        self.forwarded = false;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(super::validity::DEFAULT_QUIET_INTERVAL)
    }
}
