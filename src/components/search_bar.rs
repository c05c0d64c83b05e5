//! Search Bar Component
//!
//! Text input bound to the screen's search term. Filters on every keystroke.

use leptos::prelude::*;

use crate::config::SEARCH_PLACEHOLDER;
use crate::store::{store_filter, use_task_store, TaskScreenStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_task_store();

    view! {
        <input
            type="text"
            class="search-input"
            placeholder=SEARCH_PLACEHOLDER
            autocomplete="off"
            prop:value=move || store.search_term().get()
            on:input=move |ev| store_filter(&store, event_target_value(&ev))
        />
    }
}
