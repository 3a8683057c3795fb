//! UI Components
//!
//! Leptos components for the FeedLogic screens.

mod intro_panel;
mod countdown_badge;
mod selection_progress;
mod thumbnail_card;
mod thumbnail_grid;
mod timed_selection_screen;
mod results_screen;

pub use intro_panel::IntroPanel;
pub use countdown_badge::CountdownBadge;
pub use selection_progress::SelectionProgress;
pub use thumbnail_card::ThumbnailCard;
pub use thumbnail_grid::ThumbnailGrid;
pub use timed_selection_screen::TimedSelectionScreen;
pub use results_screen::ResultsScreen;
