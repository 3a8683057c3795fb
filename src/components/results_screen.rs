//! Results Screen Component
//!
//! Closing screen reached after the last level. Shows the session log
//! kept by the rolling logger.

use leptos::prelude::*;

#[component]
pub fn ResultsScreen() -> impl IntoView {
    let lines = rolling_logger::recent_lines();
    let count = lines.len();

    view! {
        <main class="level-screen centered">
            <div class="intro-card">
                <h1 class="intro-title">"INTERNSHIP COMPLETE"</h1>
                <p class="intro-text">
                    "Thank you. FeedLogic AI is now a little bit smarter."
                </p>
                <details class="session-log">
                    <summary>{format!("Session log ({} lines)", count)}</summary>
                    <pre class="session-log-lines">
                        {lines.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                    </pre>
                </details>
            </div>
        </main>
    }
}
