//! Frontend Models
//!
//! Screen identifiers and the item type shared with the state machine.

pub use timed_selection::{Item, ItemId};

/// Screens of the experience, in visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Level 3: timed thumbnail selection
    #[default]
    VisualPreference,
    /// Closing screen
    Results,
}

impl Screen {
    /// Following screen; the last screen stays put
    pub fn next(self) -> Self {
        match self {
            Screen::VisualPreference => Screen::Results,
            Screen::Results => Screen::Results,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::VisualPreference => "visual-preference",
            Screen::Results => "results",
        }
    }
}
