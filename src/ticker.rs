//! Timer Slots
//!
//! A slot owns at most one browser timer handle. Gloo handles clear their
//! timer on drop, so replacing, stopping or dropping the slot is enough to
//! guarantee nothing fires afterwards.

use gloo_timers::callback::{Interval, Timeout};
use timed_selection::TickOutcome;

/// Drives `TimedSelection::tick`
pub type Ticker = TimerSlot<Interval>;

/// Clears the pop animation on the last clicked card
pub type PopTimer = TimerSlot<Timeout>;

pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    /// Arm with `handle`, dropping any timer already held
    pub fn start(&mut self, handle: H) {
        if self.stop() {
            log::debug!("[TIMER] replaced running timer");
        }
        self.handle = Some(handle);
    }

    /// Drop the held timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Apply a tick result. Releases the timer once the countdown expired;
    /// returns whether ticking should continue.
    pub fn settle(&mut self, outcome: TickOutcome) -> bool {
        match outcome {
            TickOutcome::Expired => {
                if self.stop() {
                    log::debug!("[TIMER] released on expiry");
                }
                false
            }
            TickOutcome::Ignored(_) => {
                self.stop();
                false
            }
            TickOutcome::Ticked | TickOutcome::BecameUrgent => self.is_running(),
        }
    }
}
