//! Countdown Badge Component

use leptos::prelude::*;

/// Remaining time, highlighted once urgent
#[component]
pub fn CountdownBadge(
    #[prop(into)] remaining: Signal<u32>,
    #[prop(into)] urgent: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || if urgent.get() { "countdown urgent" } else { "countdown" }>
            {move || format!("Time Left: {}s", remaining.get())}
        </div>
    }
}
