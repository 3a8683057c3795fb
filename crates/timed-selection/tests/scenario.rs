//! Timed Selection Scenario Tests
//!
//! Full runs of the Level 3 screen with the default configuration.

use std::cell::RefCell;

use proptest::prelude::*;
use timed_selection::{
    Navigator, Phase, ScreenConfig, TickOutcome, TimedSelection, ToggleOutcome,
};

/// Records every navigation request
#[derive(Default)]
struct RecordingNavigator {
    calls: RefCell<Vec<&'static str>>,
}

impl Navigator for RecordingNavigator {
    fn go_to_next_screen(&self) {
        self.calls.borrow_mut().push("next");
    }
}

fn level3() -> TimedSelection {
    TimedSelection::from_config(&ScreenConfig::default())
}

#[test]
fn test_level3_full_run() {
    let nav = RecordingNavigator::default();
    let mut screen = level3();
    assert!(screen.start());

    for id in [3, 7, 3, 12, 9, 15, 21] {
        screen.toggle_select(id);
    }
    assert_eq!(screen.selection().ids(), &[7, 12, 9, 15, 21]);
    assert_eq!(screen.selection().rank_of(21), Some(5));

    let mut urgent_at = None;
    for n in 1..=20 {
        let outcome = screen.tick();
        if outcome == TickOutcome::BecameUrgent {
            urgent_at = Some(n);
        }
        if n < 20 {
            assert_eq!(screen.phase(), Phase::Active);
        }
    }

    assert_eq!(screen.remaining(), 0);
    assert_eq!(screen.phase(), Phase::Expired);
    assert!(screen.is_urgent());
    // Raised by the decrement that leaves 5 on the clock.
    assert_eq!(urgent_at, Some(15));

    assert!(screen.complete(&nav));
    assert_eq!(nav.calls.borrow().len(), 1);
}

#[test]
fn test_extra_tick_after_expiry_is_noop() {
    let mut screen = level3();
    screen.start();
    for _ in 0..20 {
        screen.tick();
    }
    let before = screen.clone();

    assert!(matches!(screen.tick(), TickOutcome::Ignored(_)));
    assert_eq!(screen, before);
}

#[test]
fn test_sixth_distinct_item_rejected_when_full() {
    let mut screen = level3();
    screen.start();
    for id in 1..=5 {
        screen.toggle_select(id);
    }
    assert!(matches!(screen.toggle_select(6), ToggleOutcome::Ignored(_)));
    assert_eq!(screen.selection().ids(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_complete_before_expiry_does_not_navigate() {
    let nav = RecordingNavigator::default();
    let mut screen = level3();
    assert!(!screen.complete(&nav));

    screen.start();
    for _ in 0..19 {
        screen.tick();
    }
    assert!(!screen.complete(&nav));
    assert!(nav.calls.borrow().is_empty());
}

proptest! {
    #[test]
    fn prop_selection_never_exceeds_cap(
        max in 1usize..8,
        clicks in proptest::collection::vec(1u32..=30, 0..60),
    ) {
        let mut screen = TimedSelection::new(20, 5, max);
        screen.start();
        for id in clicks {
            let before = screen.selection().len();
            let was_selected = screen.selection().contains(id);
            let outcome = screen.toggle_select(id);
            let after = screen.selection().len();

            prop_assert!(after <= max);
            match outcome {
                ToggleOutcome::Removed => {
                    prop_assert!(was_selected);
                    prop_assert_eq!(after, before - 1);
                    prop_assert!(!screen.selection().contains(id));
                }
                ToggleOutcome::Added { rank } => {
                    prop_assert!(!was_selected);
                    prop_assert_eq!(after, before + 1);
                    prop_assert_eq!(rank, after);
                }
                ToggleOutcome::Ignored(_) => {
                    prop_assert_eq!(before, max);
                    prop_assert_eq!(after, before);
                }
            }
        }
    }

    #[test]
    fn prop_n_ticks_expire_exactly(duration in 1u32..60) {
        let mut screen = TimedSelection::new(duration, 0, 5);
        screen.start();
        for _ in 0..duration - 1 {
            prop_assert_eq!(screen.phase(), Phase::Active);
            screen.tick();
        }
        prop_assert_eq!(screen.remaining(), 1);
        prop_assert_eq!(screen.tick(), TickOutcome::Expired);
        prop_assert_eq!(screen.remaining(), 0);
        prop_assert!(matches!(screen.tick(), TickOutcome::Ignored(_)));
    }
}
