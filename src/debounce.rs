use std::{future::pending, time::Duration};

use tokio::time::{Instant, sleep_until};

/// Coalesces bursts of triggers into a single firing after a quiet period.
///
/// The pending deadline acts as the cancellation handle: re-triggering moves it,
/// cancelling drops it.
#[must_use]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub const fn new(window: Duration) -> Self {
        Self { window, deadline: None }
    }

    /// Arm the deadline, or push an already armed one further.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Void the pending trigger, if any.
    pub const fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve when the armed deadline passes, never resolve when nothing is armed.
    ///
    /// Cancel-safe: dropping the future keeps the deadline armed.
    pub async fn elapsed(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => pending().await,
        }
    }
}
