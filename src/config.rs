//! Screen Configuration
//!
//! Feed endpoint and the fixed user-facing strings of the task screen.

use log::LevelFilter;

/// Remote resource returning the JSON task array
pub const DEFAULT_TASKS_URL: &str = "https://jsonplaceholder.typicode.com/todos";

pub const SCREEN_TITLE: &str = "Task Manager";
pub const SEARCH_PLACEHOLDER: &str = "Search tasks...";
pub const LOADING_TEXT: &str = "Loading tasks...";
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load tasks. Please try again later.";

/// Where the task list is fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub tasks_url: String,
}

impl FeedConfig {
    pub fn new(tasks_url: impl Into<String>) -> Self {
        Self {
            tasks_url: tasks_url.into(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TASKS_URL)
    }
}

/// Console verbosity: debug builds log filter/select activity too
pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
