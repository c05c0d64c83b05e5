//! Task List Frontend App
//!
//! Root component: builds the feed source and hosts the task screen.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::{HttpTaskSource, TaskSource};
use crate::components::TaskListScreen;
use crate::config::FeedConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = FeedConfig::default();
    let source: Rc<dyn TaskSource> = Rc::new(HttpTaskSource::from_config(&config));

    view! {
        <main class="mobile-app-container">
            <TaskListScreen source=source />
        </main>
    }
}
