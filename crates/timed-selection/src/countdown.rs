//! Countdown
//!
//! Remaining-time counter with a one-way urgency flag and a terminal
//! expired state. Time units are whole ticks.

/// What a single decrement did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Decremented, nothing else changed
    Ticked,
    /// Decremented and crossed the urgency threshold
    BecameUrgent,
    /// Decremented to zero
    Expired,
    /// Already at zero; nothing changed
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    threshold: u32,
    urgent: bool,
}

impl Countdown {
    pub fn new(duration: u32, threshold: u32) -> Self {
        Self {
            remaining: duration,
            threshold,
            // A countdown that starts inside the threshold is urgent from the start.
            urgent: duration <= threshold,
        }
    }

    pub fn tick(&mut self) -> CountdownStep {
        if self.remaining == 0 {
            return CountdownStep::Stopped;
        }
        self.remaining -= 1;

        let crossed = !self.urgent && self.remaining <= self.threshold;
        if crossed {
            self.urgent = true;
        }

        if self.remaining == 0 {
            CountdownStep::Expired
        } else if crossed {
            CountdownStep::BecameUrgent
        } else {
            CountdownStep::Ticked
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_urgent(&self) -> bool {
        self.urgent
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
