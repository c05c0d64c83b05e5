//! Task Screen Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: components read
//! single fields (`search_term`, `selected_id`, `tasks`, `status`) so a
//! keystroke does not re-run row highlighting and a tap does not re-filter.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::TaskSource;
use crate::error::LoadError;
use crate::filter::filter_tasks;
use crate::models::{Task, TaskId};
use crate::screen::{ScreenPhase, TaskScreen};

pub use crate::screen::TaskScreenStoreFields;

/// Type alias for the store
pub type TaskStore = Store<TaskScreen>;

pub fn new_task_store() -> TaskStore {
    Store::new(TaskScreen::new())
}

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run the mount hook; `true` means this caller should start the load
pub fn store_initialize(store: &TaskStore) -> bool {
    store.try_update(|screen| screen.initialize()).unwrap_or(false)
}

pub fn store_begin_load(store: &TaskStore) {
    store.update(|screen| screen.begin_load());
}

/// Apply a fetch outcome. Returns `false` when the store was disposed
/// before the fetch finished, in which case the outcome is dropped.
pub fn store_finish_load(store: &TaskStore, outcome: Result<Vec<Task>, LoadError>) -> bool {
    store.try_update(|screen| screen.finish_load(outcome)).is_some()
}

/// Mark the screen loading and fetch on the UI event loop
pub fn spawn_load(store: TaskStore, source: Rc<dyn TaskSource>) {
    store_begin_load(&store);

    spawn_local(async move {
        let outcome = source.fetch_tasks().await;
        if !store_finish_load(&store, outcome) {
            log::debug!("[STORE] Screen disposed before task load finished");
        }
    });
}

/// Update the search term field only; rows tracking `selected_id` stay put
pub fn store_filter(store: &TaskStore, term: String) {
    log::debug!("[STORE] Filter term {:?}", term);
    *store.search_term().write() = term;
}

/// Update the selected id field only; the visible list is not recomputed
pub fn store_select(store: &TaskStore, id: TaskId) {
    log::debug!("[STORE] Selected task {}", id);
    *store.selected_id().write() = Some(id);
}

// ========================
// Field Readers
// ========================

/// Tracks `tasks` and `search_term`
pub fn store_visible(store: &TaskStore) -> Vec<Task> {
    filter_tasks(&store.tasks().read(), &store.search_term().read())
}

/// Tracks `status`
pub fn store_phase(store: &TaskStore) -> ScreenPhase {
    store.status().read().phase()
}

/// Tracks `selected_id`
pub fn store_is_selected(store: &TaskStore, id: TaskId) -> bool {
    store.selected_id().get() == Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOAD_FAILED_MESSAGE;
    use crate::screen::LoadStatus;

    #[test]
    fn test_store_helpers_drive_screen() {
        let owner = Owner::new();
        owner.set();

        let store = new_task_store();
        assert!(store_initialize(&store));
        assert!(!store_initialize(&store));

        store_filter(&store, "dog".to_string());
        store_select(&store, 2);

        let screen = store.read_untracked();
        assert_eq!(screen.search_term(), "dog");
        assert_eq!(screen.selected_id(), Some(2));
    }

    #[test]
    fn test_field_readers_follow_load_filter_select() {
        let owner = Owner::new();
        owner.set();

        let store = new_task_store();
        store_begin_load(&store);
        assert_eq!(store_phase(&store), ScreenPhase::Loading);

        let tasks = vec![Task::new(1, "Buy milk"), Task::new(2, "Walk dog")];
        assert!(store_finish_load(&store, Ok(tasks.clone())));
        assert_eq!(store_phase(&store), ScreenPhase::Ready);
        assert_eq!(store_visible(&store), tasks);

        store_filter(&store, "DOG".to_string());
        assert_eq!(store_visible(&store), vec![Task::new(2, "Walk dog")]);

        store_select(&store, 2);
        assert!(store_is_selected(&store, 2));
        assert!(!store_is_selected(&store, 1));

        store_filter(&store, String::new());
        assert_eq!(store_visible(&store).len(), 2);
        assert!(store_is_selected(&store, 2));
    }

    #[test]
    fn test_failed_load_through_store() {
        let owner = Owner::new();
        owner.set();

        let store = new_task_store();
        store_begin_load(&store);
        assert!(store_finish_load(&store, Err(LoadError::Status { status: 500 })));

        assert_eq!(store_phase(&store), ScreenPhase::Error);
        assert_eq!(
            store.status().get(),
            LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string())
        );
        assert!(store_visible(&store).is_empty());
    }

    #[test]
    fn test_outcome_dropped_after_dispose() {
        let owner = Owner::new();
        owner.set();

        let store = new_task_store();
        store_begin_load(&store);
        assert_eq!(store.read_untracked().status(), &LoadStatus::Loading);

        owner.cleanup();

        assert!(!store_finish_load(&store, Ok(vec![Task::new(1, "Late")])));
    }
}
