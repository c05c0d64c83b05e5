//! Task List Screen Component
//!
//! Owns the screen store, starts the one-shot load on mount, and switches
//! between the loading, error and list views.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::TaskSource;
use crate::components::{ErrorView, LoadingView, SearchBar, TaskRow};
use crate::config::{LOADING_TEXT, SCREEN_TITLE};
use crate::screen::ScreenPhase;
use crate::store::{new_task_store, spawn_load, store_initialize, store_phase, store_visible, TaskScreenStoreFields};

#[component]
pub fn TaskListScreen(source: Rc<dyn TaskSource>) -> impl IntoView {
    let store = new_task_store();
    provide_context(store);

    // Mount: load exactly once
    if store_initialize(&store) {
        spawn_load(store, source);
    }

    // Only re-render the outer view when the phase changes, so the search
    // input keeps focus while typing
    let phase = Memo::new(move |_| store_phase(&store));

    view! {
        {move || match phase.get() {
            ScreenPhase::Loading => view! { <LoadingView text=LOADING_TEXT /> }.into_any(),
            ScreenPhase::Error => {
                let message = store
                    .status()
                    .read_untracked()
                    .failure_message()
                    .unwrap_or_default()
                    .to_string();
                view! { <ErrorView message=message /> }.into_any()
            }
            ScreenPhase::Ready => view! {
                <div class="screen-container">
                    <h1 class="screen-header">{SCREEN_TITLE}</h1>
                    <SearchBar />
                    <div class="task-list">
                        <For
                            each=move || store_visible(&store)
                            key=|task| task.id
                            children=move |task| view! { <TaskRow task=task /> }
                        />
                    </div>
                </div>
            }.into_any(),
        }}
    }
}
