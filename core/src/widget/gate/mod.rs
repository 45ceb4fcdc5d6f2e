//! Trailing-edge debounce gate.
//!
//! Holds at most one armed timer. Re-arming replaces the previous deadline,
//! so only the last keystroke of a burst survives to fire.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TimerGate {
    delay: Duration,
    armed: Option<Armed>,
}

#[derive(Debug)]
struct Armed {
    deadline: Instant,
    text: String,
}

impl TimerGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records `text` and (re)starts the quiet period from `now`.
    pub fn arm(&mut self, text: impl Into<String>, now: Instant) {
        self.armed = Some(Armed {
            deadline: now + self.delay,
            text: text.into(),
        });
    }

    /// Releases the timer. Returns true if one was armed.
    pub fn disarm(&mut self) -> bool {
        self.armed.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.as_ref().map(|armed| armed.deadline)
    }

    /// Returns the recorded text once the quiet period has elapsed.
    ///
    /// Firing releases the timer; a gate that is not yet due stays armed.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        let due = self.armed.as_ref()?.deadline <= now;
        if !due {
            return None;
        }
        self.armed.take().map(|armed| armed.text)
    }
}
