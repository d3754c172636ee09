//! Success notification with an auto-dismiss countdown

use crate::pipeline::FormKind;
use std::time::{Duration, Instant};

/// Transient success dialog that closes itself after a fixed delay.
///
/// The notification is a deadline rather than a timer: the UI loop checks
/// [`SuccessNotification::is_expired`] on every tick and drops the value,
/// which also cancels it.
#[derive(Debug, Clone)]
pub struct SuccessNotification {
    pub kind: FormKind,
    pub message: String,
    /// When the notification was opened
    pub opened_at: Instant,
    /// How long it stays open
    pub duration: Duration,
}

impl SuccessNotification {
    /// Countdown used when the configuration does not override it
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

    pub fn new(kind: FormKind, duration: Duration) -> Self {
        Self::opened_at(kind, duration, Instant::now())
    }

    pub fn opened_at(kind: FormKind, duration: Duration, opened_at: Instant) -> Self {
        Self {
            kind,
            message: kind.success_message().to_string(),
            opened_at,
            duration,
        }
    }

    /// Whole seconds left as of `now`, rounded up
    pub fn remaining_secs_at(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.opened_at);
        let remaining = self.duration.saturating_sub(elapsed);
        let secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Whole seconds left, for the "Closing in Ns" line
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.opened_at) >= self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}
