//! The invalid-claim revert timer.

use std::time::{Duration, Instant};

/// How long a rejected claim displays the invalid status before the
/// session reverts to active. Fixed, not configurable.
pub const INVALID_DISPLAY: Duration = Duration::from_millis(3000);

/// One-shot scheduled revert, owned by the session.
///
/// The session drops the timer on `start()` or on an accepted claim, so
/// a stale revert can never fire into a newer game's status.
#[derive(Clone, Copy, Debug)]
pub struct RevertTimer {
    deadline: Instant,
}

impl RevertTimer {
    /// Schedule a revert `INVALID_DISPLAY` after `now`.
    #[must_use]
    pub fn starting(now: Instant) -> Self {
        Self {
            deadline: now + INVALID_DISPLAY,
        }
    }

    /// Whether the revert should fire at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// When the revert fires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
