//! Selection Progress Component
//!
//! Slot dots for the selection and the Continue button, which only
//! appears once the countdown has expired.

use leptos::prelude::*;

#[component]
pub fn SelectionProgress(
    /// One flag per slot, filled left to right
    #[prop(into)] slots: Signal<Vec<bool>>,
    /// True once the countdown expired
    #[prop(into)] can_complete: Signal<bool>,
    #[prop(into)] on_complete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="selection-progress">
            <div class="selection-count">
                "Selected: "
                <div class="slot-dots">
                    {move || slots.get().into_iter().map(|filled| {
                        view! {
                            <div class=if filled { "slot-dot filled" } else { "slot-dot" } />
                        }
                    }).collect_view()}
                </div>
            </div>
            <Show when=move || can_complete.get()>
                <button class="primary-btn continue-btn" on:click=move |_| on_complete.run(())>
                    "Continue"
                </button>
            </Show>
        </div>
    }
}
