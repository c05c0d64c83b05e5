//! Task Screen State
//!
//! The fetch/filter/select state machine behind the task list screen.
//! All mutation goes through `initialize`, `begin_load`/`finish_load`,
//! `filter` and `select`; the visible list is always recomputed from the
//! fetched tasks and the current search term.

use reactive_stores::Store;

use crate::commands::TaskSource;
use crate::config::LOADING_TEXT;
use crate::error::LoadError;
use crate::filter::filter_tasks;
use crate::models::{Task, TaskId};

/// Fetch lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn phase(&self) -> ScreenPhase {
        match self {
            LoadStatus::Idle | LoadStatus::Loading => ScreenPhase::Loading,
            LoadStatus::Failed(_) => ScreenPhase::Error,
            LoadStatus::Loaded => ScreenPhase::Ready,
        }
    }
}

/// What the screen as a whole is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Loading,
    Error,
    Ready,
}

/// One list row as the presentation layer draws it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowView {
    pub id: TaskId,
    pub title: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Loading { text: &'static str },
    Error { message: String },
    Ready { search_term: String, rows: Vec<TaskRowView> },
}

/// Screen state. Components subscribe to individual fields through the
/// derived store accessors.
#[derive(Debug, Clone, Default, Store)]
pub struct TaskScreen {
    tasks: Vec<Task>,
    search_term: String,
    selected_id: Option<TaskId>,
    status: LoadStatus,
    initialized: bool,
}

impl TaskScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount hook. Returns `true` exactly once; the owner starts the load
    /// only then.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        true
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Apply the outcome of a fetch. Failures keep whatever tasks were
    /// already held.
    pub fn finish_load(&mut self, outcome: Result<Vec<Task>, LoadError>) {
        match outcome {
            Ok(tasks) => {
                log::info!("[SCREEN] Loaded {} tasks", tasks.len());
                self.tasks = tasks;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::warn!("[SCREEN] Task load failed: {}", err);
                self.status = LoadStatus::Failed(err.user_message().to_string());
            }
        }
    }

    /// Store the search term as typed; the visible list follows from it.
    pub fn filter(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        log::debug!("[SCREEN] Filter term {:?}", self.search_term);
    }

    /// Replace the selection. Selecting the current id keeps it selected.
    pub fn select(&mut self, id: TaskId) {
        log::debug!("[SCREEN] Selected task {}", id);
        self.selected_id = Some(id);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_id
    }

    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selected_id == Some(id)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn phase(&self) -> ScreenPhase {
        self.status.phase()
    }

    /// Tasks matching the current search term, in feed order
    pub fn visible(&self) -> Vec<Task> {
        filter_tasks(&self.tasks, &self.search_term)
    }

    pub fn view(&self) -> ScreenView {
        match &self.status {
            LoadStatus::Idle | LoadStatus::Loading => ScreenView::Loading { text: LOADING_TEXT },
            LoadStatus::Failed(message) => ScreenView::Error {
                message: message.clone(),
            },
            LoadStatus::Loaded => ScreenView::Ready {
                search_term: self.search_term.clone(),
                rows: self
                    .visible()
                    .into_iter()
                    .map(|task| TaskRowView {
                        selected: self.is_selected(task.id),
                        id: task.id,
                        title: task.title,
                    })
                    .collect(),
            },
        }
    }
}

/// Run one fetch against `source` and apply its outcome.
pub async fn load<S: TaskSource + ?Sized>(screen: &mut TaskScreen, source: &S) {
    screen.begin_load();
    let outcome = source.fetch_tasks().await;
    screen.finish_load(outcome);
}
