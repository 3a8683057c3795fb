//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use timed_selection::{Navigator, ScreenConfig};

use crate::models::Screen;
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen lives here
    store: AppStore,
    /// Validated screen tunables, read once at startup
    config: StoredValue<ScreenConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ScreenConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ScreenConfig {
        self.config.get_value()
    }

    /// Current screen (tracked)
    pub fn screen(&self) -> Screen {
        self.store.screen().get()
    }
}

impl Navigator for AppContext {
    fn go_to_next_screen(&self) {
        let from = self.store.screen().get_untracked();
        let to = from.next();
        if from == to {
            log::debug!("[NAV] already on last screen {}", from.as_str());
            return;
        }
        self.store.screen().set(to);
        log::info!("[NAV] {} -> {}", from.as_str(), to.as_str());
    }
}

/// Get the app context; panics if the App root did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
