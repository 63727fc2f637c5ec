//! Login field state machines

/// Validity of a field as of its last recompute.
///
/// A field starts `Uncomputed` and stays that way until it has been edited
/// or blurred at least once. Error styling keys off `Invalid` only, so an
/// untouched field never renders as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Uncomputed,
    Valid,
    Invalid,
}

impl Validity {
    /// True only for `Valid`. `Uncomputed` counts as not-yet-valid for
    /// aggregation and submission.
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// True only for `Invalid`.
    pub fn is_marked_invalid(self) -> bool {
        matches!(self, Validity::Invalid)
    }

    fn from_bool(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Events a field state machine consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Replace the value wholesale. Typing, backspace and paste all reduce
    /// to this; validity is recomputed from the new value.
    Edit(String),
    /// Keyboard focus left the field; revalidate the unchanged value.
    Blur,
    /// Clear the field. Unlike a freshly created field, a reset one is
    /// marked invalid rather than uncomputed.
    Reset,
}

/// Email validity: the value contains an `@`.
pub fn email_predicate(value: &str) -> bool {
    value.contains('@')
}

/// Password validity: more than six characters.
pub fn password_predicate(value: &str) -> bool {
    value.chars().count() > 6
}

/// One tracked form field: current raw value plus last-computed validity.
///
/// Two instances exist (email, password), differing only in their validity
/// predicate. `validity` is always `predicate(value)` as of the last `Edit`
/// or `Blur`; both recompute synchronously, so it is never stale once a
/// transition completes.
#[derive(Debug, Clone)]
pub struct FieldState {
    value: String,
    validity: Validity,
    predicate: fn(&str) -> bool,
}

impl FieldState {
    /// Create the email field (empty, uncomputed).
    pub fn email() -> Self {
        Self::new(email_predicate)
    }

    /// Create the password field (empty, uncomputed).
    pub fn password() -> Self {
        Self::new(password_predicate)
    }

    fn new(predicate: fn(&str) -> bool) -> Self {
        Self {
            value: String::new(),
            validity: Validity::Uncomputed,
            predicate,
        }
    }

    /// Current raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Validity as of the last recompute.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Apply one event to the state machine.
    pub fn apply(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::Edit(value) => {
                self.validity = Validity::from_bool((self.predicate)(&value));
                self.value = value;
            }
            FieldEvent::Blur => {
                self.validity = Validity::from_bool((self.predicate)(&self.value));
            }
            FieldEvent::Reset => {
                self.value.clear();
                self.validity = Validity::Invalid;
            }
        }
    }

    /// Append one character by way of a whole-value edit.
    pub fn push_char(&mut self, c: char) {
        let mut next = self.value.clone();
        next.push(c);
        self.apply(FieldEvent::Edit(next));
    }

    /// Remove the last character by way of a whole-value edit.
    ///
    /// A backspace in an already-empty field changes nothing and therefore
    /// fires no event, so a pristine field stays uncomputed.
    pub fn pop_char(&mut self) {
        if self.value.is_empty() {
            return;
        }
        let mut next = self.value.clone();
        next.pop();
        self.apply(FieldEvent::Edit(next));
    }

    /// Append a string (clipboard paste) by way of a whole-value edit.
    pub fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let mut next = self.value.clone();
        next.push_str(s);
        self.apply(FieldEvent::Edit(next));
    }
}
