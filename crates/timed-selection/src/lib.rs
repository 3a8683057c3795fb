//! Timed Selection
//!
//! Countdown-gated, bounded multi-select over a fixed item collection.
//! This crate has NO DOM dependencies: the frontend drives it with
//! explicit transition calls and a single external tick source.

mod config;
mod countdown;
mod item;
mod navigation;
mod screen;
mod selection;

pub use config::{ConfigError, ConfigResult, ScreenConfig};
pub use countdown::{Countdown, CountdownStep};
pub use item::{Item, ItemId};
pub use navigation::Navigator;
pub use screen::{IgnoreReason, Phase, TickOutcome, TimedSelection, ToggleOutcome};
pub use selection::{SelectionSet, Toggle};
