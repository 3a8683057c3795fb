//! Thumbnail Grid Component

use leptos::prelude::*;
use timed_selection::TimedSelection;

use crate::components::ThumbnailCard;
use crate::models::{Item, ItemId};

/// Grid of every item in the fixed collection
#[component]
pub fn ThumbnailGrid(
    items: Vec<Item>,
    state: RwSignal<TimedSelection>,
    last_clicked: ReadSignal<Option<ItemId>>,
    on_toggle: Callback<ItemId>,
) -> impl IntoView {
    let locked = Memo::new(move |_| state.with(|s| s.is_expired()));

    view! {
        <div class="thumbnail-grid">
            {items.into_iter().map(|item| {
                let id = item.id;
                let rank = Memo::new(move |_| state.with(|s| s.selection().rank_of(id)));
                let popping = Memo::new(move |_| last_clicked.get() == Some(id));
                view! {
                    <ThumbnailCard
                        item=item
                        rank=rank
                        locked=locked
                        popping=popping
                        on_toggle=on_toggle
                    />
                }
            }).collect_view()}
        </div>
    }
}
