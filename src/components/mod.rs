//! UI Components
//!
//! Leptos components for the task list screen.

mod task_list_screen;
mod search_bar;
mod task_row;
mod status_view;

pub use task_list_screen::TaskListScreen;
pub use search_bar::SearchBar;
pub use task_row::TaskRow;
pub use status_view::{ErrorView, LoadingView};
