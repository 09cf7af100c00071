//! Transient user-facing notices with replaceable expiry.
//!
//! The board holds at most one notice. Posting a new notice replaces the
//! previous one together with its deadline, so a stale deadline can never
//! clear a newer message. Time is passed in by the caller.

use std::time::{Duration, Instant};
use tracing::trace;

/// Handle for a posted notice, used to dismiss exactly that notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone)]
struct ActiveNotice {
    ticket: NoticeTicket,
    message: String,
    expires_at: Instant,
}

/// Single-slot notice holder.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    active: Option<ActiveNotice>,
    generation: u64,
}

impl NoticeBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` until `now + duration`, replacing any current notice.
    pub fn post(
        &mut self,
        message: impl Into<String>,
        now: Instant,
        duration: Duration,
    ) -> NoticeTicket {
        self.generation += 1;
        let ticket = NoticeTicket(self.generation);
        let message = message.into();
        trace!(generation = self.generation, %message, "notice posted");
        self.active = Some(ActiveNotice {
            ticket,
            message,
            expires_at: now + duration,
        });
        ticket
    }

    /// The message visible at `now`, if any.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|notice| now < notice.expires_at)
            .map(|notice| notice.message.as_str())
    }

    /// Drops the notice if its deadline has passed. Returns `true` if one was
    /// cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self
            .active
            .as_ref()
            .is_some_and(|notice| now >= notice.expires_at)
        {
            self.active = None;
            return true;
        }
        false
    }

    /// Clears the notice only if `ticket` still identifies it.
    ///
    /// A ticket for a notice that has since been replaced does nothing.
    pub fn dismiss(&mut self, ticket: NoticeTicket) -> bool {
        if self
            .active
            .as_ref()
            .is_some_and(|notice| notice.ticket == ticket)
        {
            self.active = None;
            return true;
        }
        false
    }

    /// Clears whatever notice is showing.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
