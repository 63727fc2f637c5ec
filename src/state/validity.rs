//! Debounced overall-form validity

use std::time::{Duration, Instant};

/// Default quiet interval after the last validity change before the overall
/// result commits.
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(500);

/// A scheduled recompute: when it is due and the overall validity snapshot
/// taken when it was scheduled.
#[derive(Debug, Clone, Copy)]
struct PendingCheck {
    deadline: Instant,
    form_valid: bool,
}

/// Published overall validity for the login form, recomputed only after a
/// quiet interval with no further field-validity change.
///
/// The pending recompute is plain data rather than a spawned timer: a
/// superseding change overwrites the slot, and the discarded check never
/// runs. The event loop drives commits by calling [`FormValidity::poll`];
/// every operation takes an explicit `now` so timing behavior is testable
/// without sleeping.
#[derive(Debug, Clone)]
pub struct FormValidity {
    quiet_interval: Duration,
    committed: bool,
    pending: Option<PendingCheck>,
}

impl FormValidity {
    /// Create with the given quiet interval, committed `false`, nothing
    /// pending.
    pub fn new(quiet_interval: Duration) -> Self {
        Self {
            quiet_interval,
            committed: false,
            pending: None,
        }
    }

    /// Last committed overall validity. Lags the instantaneous AND of the
    /// field validities by up to the quiet interval.
    pub fn committed(&self) -> bool {
        self.committed
    }

    /// Whether a recompute is scheduled and not yet due.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending recompute, if any. The event loop uses this
    /// to cap its poll timeout so commits land on time.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Record a change to the field-validity pair: discard any pending
    /// recompute and schedule a fresh one for `now + quiet_interval`,
    /// snapshotting the overall validity as of this change.
    pub fn note_change(&mut self, form_valid: bool, now: Instant) {
        self.pending = Some(PendingCheck {
            deadline: now + self.quiet_interval,
            form_valid,
        });
    }

    /// Commit the pending recompute if its deadline has passed. Returns the
    /// newly committed value, or `None` if nothing was due.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        let check = self.pending?;
        if now < check.deadline {
            return None;
        }
        self.pending = None;
        self.committed = check.form_valid;
        Some(self.committed)
    }

    /// Back to the initial state: nothing pending, committed `false`.
    pub fn reset(&mut self) {
        self.pending = None;
        self.committed = false;
    }
}

impl Default for FormValidity {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_INTERVAL)
    }
}
