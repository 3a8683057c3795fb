//! Thumbnail Card Component
//!
//! One selectable thumbnail with its rank badge.

use leptos::prelude::*;

use crate::models::{Item, ItemId};

/// CSS classes for a card in the given state
fn card_class(selected: bool, locked: bool, popping: bool) -> String {
    let mut c = "thumbnail-card".to_string();
    if selected { c.push_str(" selected"); }
    if locked {
        c.push_str(" locked");
        if !selected { c.push_str(" dimmed"); }
    }
    if popping { c.push_str(" pop"); }
    c
}

#[component]
pub fn ThumbnailCard(
    item: Item,
    /// 1-based pick order, None when not selected
    #[prop(into)] rank: Signal<Option<usize>>,
    /// Selection frozen (countdown expired)
    #[prop(into)] locked: Signal<bool>,
    /// Just clicked; plays the pop animation
    #[prop(into)] popping: Signal<bool>,
    on_toggle: Callback<ItemId>,
) -> impl IntoView {
    let id = item.id;
    let class = move || card_class(rank.get().is_some(), locked.get(), popping.get());

    view! {
        <div class=class on:click=move |_| on_toggle.run(id)>
            <img
                class="thumbnail-image"
                src=item.image_src
                alt=format!("Thumbnail {}", id)
                title=item.style
            />
            {move || match rank.get() {
                Some(r) => view! { <div class="rank-badge">{r}</div> }.into_any(),
                None => view! { <span></span> }.into_any(),
            }}
            <div class="thumbnail-shade" />
        </div>
    }
}
