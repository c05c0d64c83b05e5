//! Task Row Component
//!
//! A single selectable task in the list.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_is_selected, store_select, use_task_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_task_store();

    let id = task.id;
    let is_selected = move || store_is_selected(&store, id);

    view! {
        <button
            type="button"
            class=move || if is_selected() { "task-item selected" } else { "task-item" }
            on:click=move |_| store_select(&store, id)
        >
            <span class="task-text">{task.title}</span>
        </button>
    }
}
