//! Timed Selection Screen
//!
//! Level 3: pick up to N thumbnails before the countdown runs out.
//! Owns the screen state and the single tick source driving it.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use timed_selection::{IgnoreReason, Phase, TickOutcome, TimedSelection, ToggleOutcome};

use crate::components::{CountdownBadge, IntroPanel, SelectionProgress, ThumbnailGrid};
use crate::context::use_app_context;
use crate::models::{Item, ItemId};
use crate::ticker::{PopTimer, Ticker};

/// How long the pop animation class stays on a clicked card
const POP_MS: u32 = 500;

#[component]
pub fn TimedSelectionScreen() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let duration = config.duration;
    let max_selection = config.max_selection;
    let tick_ms = config.tick_interval_ms;

    let items = StoredValue::new(Item::catalog(config.item_count, &config.asset_prefix));
    let state = RwSignal::new(TimedSelection::from_config(&config));
    let ticker = StoredValue::new_local(Ticker::default());
    let pop_timer = StoredValue::new_local(PopTimer::default());
    let (last_clicked, set_last_clicked) = signal(None::<ItemId>);
    let (last_tick, set_last_tick) = signal(None::<TickOutcome>);

    // Derived view state
    let started = Memo::new(move |_| state.with(|s| s.phase() != Phase::Intro));
    let remaining = Memo::new(move |_| state.with(|s| s.remaining()));
    let urgent = Memo::new(move |_| state.with(|s| s.is_urgent()));
    let expired = Memo::new(move |_| state.with(|s| s.is_expired()));
    let slots = Memo::new(move |_| state.with(|s| s.slots()));

    // Release the interval as soon as the countdown expires. Runs after
    // the tick callback returns, never inside it.
    Effect::new(move |_| {
        if let Some(outcome) = last_tick.get() {
            ticker.update_value(|t| {
                t.settle(outcome);
            });
        }
    });

    // ...or when the screen is torn down first
    on_cleanup(move || {
        ticker.try_update_value(|t| {
            if t.stop() {
                log::debug!("[Level3] ticker released on teardown");
            }
        });
        pop_timer.try_update_value(|t| {
            t.stop();
        });
    });

    let on_start = Callback::new(move |_: ()| {
        let started = state.try_update(|s| s.start()).unwrap_or(false);
        if !started {
            return;
        }
        log::info!("[Level3] started: {} ticks every {}ms", duration, tick_ms);
        let interval = Interval::new(tick_ms, move || {
            let Some(outcome) = state.try_update(|s| s.tick()) else {
                return;
            };
            match outcome {
                TickOutcome::BecameUrgent => log::info!("[Level3] countdown urgent"),
                TickOutcome::Expired => log::info!(
                    "[Level3] time up, picks={:?}",
                    state.with_untracked(|s| s.selection().ids().to_vec())
                ),
                _ => {}
            }
            set_last_tick.try_set(Some(outcome));
        });
        ticker.update_value(|t| t.start(interval));
    });

    let on_toggle = Callback::new(move |id: ItemId| {
        let outcome = state.try_update(|s| s.toggle_select(id));
        match outcome {
            Some(ToggleOutcome::Ignored(IgnoreReason::Expired))
            | Some(ToggleOutcome::Ignored(IgnoreReason::NotStarted))
            | None => {}
            _ => {
                set_last_clicked.set(Some(id));
                // Replacing the slot cancels the previous card's timeout
                let timeout = Timeout::new(POP_MS, move || {
                    set_last_clicked.try_set(None);
                });
                pop_timer.update_value(|t| t.start(timeout));
            }
        }
    });

    let on_complete = Callback::new(move |_: ()| {
        let snapshot = state.get_untracked();
        if snapshot.complete(&ctx) {
            log::info!("[Level3] completed with {} picks", snapshot.selection().len());
        }
    });

    view! {
        <main class=move || if started.get() { "level-screen" } else { "level-screen centered" }>
            <Show
                when=move || started.get()
                fallback=move || view! {
                    <IntroPanel duration=duration max_selection=max_selection on_start=on_start />
                }
            >
                <div class="board">
                    <header class="board-header">
                        <h1 class="board-title">
                            {format!("Select {} Most Engaging Thumbnails", max_selection)}
                        </h1>
                        <CountdownBadge remaining=remaining urgent=urgent />
                    </header>
                    <div class="board-panel">
                        <SelectionProgress
                            slots=slots
                            can_complete=expired
                            on_complete=on_complete
                        />
                        <ThumbnailGrid
                            items=items.get_value()
                            state=state
                            last_clicked=last_clicked
                            on_toggle=on_toggle
                        />
                    </div>
                </div>
            </Show>
        </main>
    }
}
