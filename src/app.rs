//! FeedLogic Frontend App
//!
//! Root component: loads config, provides context, mounts the current screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ResultsScreen, TimedSelectionScreen};
use crate::config::load_screen_config;
use crate::context::AppContext;
use crate::models::Screen;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_screen_config();
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Switching screens drops the previous screen's scope (and its ticker)
    view! {
        <div class="app-layout">
            {move || match ctx.screen() {
                Screen::VisualPreference => view! { <TimedSelectionScreen /> }.into_any(),
                Screen::Results => view! { <ResultsScreen /> }.into_any(),
            }}
        </div>
    }
}
