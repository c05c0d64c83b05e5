//! Filter Utilities
//!
//! Case-insensitive title search over the task list.

use crate::models::Task;

/// A term made only of whitespace filters nothing. U+FEFF counts as
/// whitespace here, as it does for browser string trimming.
pub fn is_blank_term(term: &str) -> bool {
    term.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Substring match on the lowercased title. `needle` must already be lowercase.
pub fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

/// Tasks whose title contains `term`, ignoring case, in their original order.
///
/// The term is not trimmed unless it is entirely whitespace, in which case
/// the whole list comes back.
pub fn filter_tasks(tasks: &[Task], term: &str) -> Vec<Task> {
    if is_blank_term(term) {
        return tasks.to_vec();
    }

    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| title_matches(&task.title, &needle))
        .cloned()
        .collect()
}
