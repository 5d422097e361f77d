//! Single-slot transient messages
//!
//! Showing a message replaces whatever was on screen and cancels its pending
//! expiry, so an old deadline can never clear a newer message. Time is passed
//! in by the caller; the event loop polls with the current instant.

use std::time::{Duration, Instant};

/// How long a message stays visible
pub const MESSAGE_DURATION: Duration = Duration::from_millis(1000);

/// Display hint for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: MessageStyle::Error,
        }
    }
}

/// Holds at most one live message and at most one pending expiry
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Message>,
    deadline: Option<Instant>,
    duration: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(MESSAGE_DURATION)
    }
}

impl Notifier {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            deadline: None,
            duration,
        }
    }

    /// Show `message` now, replacing the previous deadline
    pub fn show(&mut self, message: Message, now: Instant) {
        self.current = Some(message);
        self.deadline = Some(now + self.duration);
    }

    /// Fire the pending expiry if its deadline has passed
    ///
    /// Returns `true` when a message was cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.current.take().is_some()
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// When the current message will be cleared, if one is pending
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
