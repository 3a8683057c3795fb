//! Intro Panel Component
//!
//! Instructions card shown before the countdown starts.

use leptos::prelude::*;

/// Level 3 instructions with the start button
///
/// # Arguments
/// * `duration` - Countdown length in seconds, shown in the copy
/// * `max_selection` - How many thumbnails to pick
/// * `on_start` - Called when the user starts the challenge
#[component]
pub fn IntroPanel(
    duration: u32,
    max_selection: usize,
    #[prop(into)] on_start: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="intro-card">
            <h1 class="intro-title">"LEVEL 3 — VISUAL PREFERENCE"</h1>
            <p class="intro-text">
                "FeedLogic needs your help to understand what content is most engaging."
            </p>
            <p class="intro-text">
                {format!(
                    "You have {} seconds to select {} thumbnails that catch your attention the most.",
                    duration, max_selection
                )}
            </p>
            <p class="intro-text">
                "Choose quickly - your first instinct is what we're looking for!"
            </p>
            <button class="primary-btn" on:click=move |_| on_start.run(())>
                "Start Challenge"
            </button>
        </div>
    }
}
