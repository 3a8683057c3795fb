//! Timed Selection State Machine
//!
//! Intro -> Active -> Expired. Selection is only accepted while Active;
//! completion is only accepted once Expired. Invalid actions are absorbed
//! as no-ops and reported through the returned outcome, never as errors.

use crate::config::ScreenConfig;
use crate::countdown::{Countdown, CountdownStep};
use crate::item::ItemId;
use crate::navigation::Navigator;
use crate::selection::{SelectionSet, Toggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Instructions shown, countdown not started
    Intro,
    /// Countdown running, selection open
    Active,
    /// Countdown at zero, selection frozen (terminal)
    Expired,
}

/// Why an action was absorbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotStarted,
    Expired,
    SelectionFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added { rank: usize },
    Removed,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ticked,
    BecameUrgent,
    /// Countdown reached zero; the tick source should be released
    Expired,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedSelection {
    phase: Phase,
    countdown: Countdown,
    selection: SelectionSet,
}

impl TimedSelection {
    pub fn new(duration: u32, urgency_threshold: u32, max_selection: usize) -> Self {
        Self {
            phase: Phase::Intro,
            countdown: Countdown::new(duration, urgency_threshold),
            selection: SelectionSet::new(max_selection),
        }
    }

    pub fn from_config(config: &ScreenConfig) -> Self {
        Self::new(config.duration, config.urgency_threshold, config.max_selection)
    }

    /// Leave the intro. Returns true only on the Intro -> Active transition.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Intro {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Active;
        log::info!("countdown started at {}", self.countdown.remaining());
        true
    }

    pub fn toggle_select(&mut self, id: ItemId) -> ToggleOutcome {
        let outcome = match self.phase {
            Phase::Intro => ToggleOutcome::Ignored(IgnoreReason::NotStarted),
            Phase::Expired => ToggleOutcome::Ignored(IgnoreReason::Expired),
            Phase::Active => match self.selection.toggle(id) {
                Toggle::Added(rank) => ToggleOutcome::Added { rank },
                Toggle::Removed => ToggleOutcome::Removed,
                Toggle::Full => ToggleOutcome::Ignored(IgnoreReason::SelectionFull),
            },
        };
        log::debug!("toggle {} -> {:?}, selection={:?}", id, outcome, self.selection.ids());
        outcome
    }

    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::Intro => return TickOutcome::Ignored(IgnoreReason::NotStarted),
            Phase::Expired => return TickOutcome::Ignored(IgnoreReason::Expired),
            Phase::Active => {}
        }

        match self.countdown.tick() {
            CountdownStep::Ticked => TickOutcome::Ticked,
            CountdownStep::BecameUrgent => {
                log::debug!("countdown urgent at {}", self.countdown.remaining());
                TickOutcome::BecameUrgent
            }
            CountdownStep::Expired | CountdownStep::Stopped => {
                self.phase = Phase::Expired;
                log::info!("countdown expired with {} selected", self.selection.len());
                TickOutcome::Expired
            }
        }
    }

    /// Hand off to the next screen. Returns whether the navigator was called.
    pub fn complete(&self, navigator: &impl Navigator) -> bool {
        if !self.can_complete() {
            log::debug!("complete ignored in {:?}", self.phase);
            return false;
        }
        navigator.go_to_next_screen();
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn is_urgent(&self) -> bool {
        self.phase != Phase::Intro && self.countdown.is_urgent()
    }

    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }

    pub fn can_complete(&self) -> bool {
        self.is_expired()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// One flag per selection slot, filled left to right
    pub fn slots(&self) -> Vec<bool> {
        (0..self.selection.max()).map(|i| i < self.selection.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn active(duration: u32) -> TimedSelection {
        let mut screen = TimedSelection::new(duration, 1, 3);
        screen.start();
        screen
    }

    #[test]
    fn test_starts_in_intro() {
        let screen = TimedSelection::new(20, 5, 5);
        assert_eq!(screen.phase(), Phase::Intro);
        assert_eq!(screen.remaining(), 20);
        assert!(!screen.is_urgent());
        assert!(!screen.can_complete());
    }

    #[test]
    fn test_start_only_once() {
        let mut screen = TimedSelection::new(20, 5, 5);
        assert!(screen.start());
        assert!(!screen.start());
        assert_eq!(screen.phase(), Phase::Active);
    }

    #[test]
    fn test_intro_ignores_ticks_and_toggles() {
        let mut screen = TimedSelection::new(20, 5, 5);
        assert_eq!(screen.tick(), TickOutcome::Ignored(IgnoreReason::NotStarted));
        assert_eq!(
            screen.toggle_select(1),
            ToggleOutcome::Ignored(IgnoreReason::NotStarted)
        );
        assert_eq!(screen.remaining(), 20);
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn test_toggle_outcomes() {
        let mut screen = active(10);
        assert_eq!(screen.toggle_select(4), ToggleOutcome::Added { rank: 1 });
        assert_eq!(screen.toggle_select(5), ToggleOutcome::Added { rank: 2 });
        assert_eq!(screen.toggle_select(6), ToggleOutcome::Added { rank: 3 });
        assert_eq!(
            screen.toggle_select(7),
            ToggleOutcome::Ignored(IgnoreReason::SelectionFull)
        );
        assert_eq!(screen.toggle_select(4), ToggleOutcome::Removed);
        assert_eq!(screen.selection().ids(), &[5, 6]);
    }

    #[test]
    fn test_expiry_freezes_selection() {
        let mut screen = active(2);
        screen.toggle_select(1);
        assert_eq!(screen.tick(), TickOutcome::BecameUrgent);
        assert_eq!(screen.tick(), TickOutcome::Expired);

        assert_eq!(
            screen.toggle_select(1),
            ToggleOutcome::Ignored(IgnoreReason::Expired)
        );
        assert_eq!(
            screen.toggle_select(2),
            ToggleOutcome::Ignored(IgnoreReason::Expired)
        );
        assert_eq!(screen.selection().ids(), &[1]);
        assert_eq!(screen.tick(), TickOutcome::Ignored(IgnoreReason::Expired));
        assert!(!screen.start());
    }

    #[test]
    fn test_complete_requires_expiry() {
        let calls = Cell::new(0);
        let nav = || calls.set(calls.get() + 1);

        let mut screen = active(1);
        assert!(!screen.complete(&nav));
        assert_eq!(calls.get(), 0);

        screen.tick();
        assert!(screen.complete(&nav));
        assert!(screen.complete(&nav));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_selection_can_still_complete() {
        let calls = Cell::new(0);
        let nav = || calls.set(calls.get() + 1);

        let mut screen = active(1);
        screen.tick();
        assert!(screen.selection().is_empty());
        assert!(screen.complete(&nav));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_slots_fill_left_to_right() {
        let mut screen = active(10);
        screen.toggle_select(9);
        screen.toggle_select(3);
        assert_eq!(screen.slots(), vec![true, true, false]);
    }
}
