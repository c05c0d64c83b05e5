//! Remote Command Wrappers
//!
//! Frontend bindings to the remote task feed.

mod task;

use async_trait::async_trait;

use crate::error::LoadError;
use crate::models::Task;

pub use task::*;

/// Anything the screen can pull its task list from.
///
/// Browser fetch futures are `!Send`, so implementations are not required
/// to be thread-safe.
#[async_trait(?Send)]
pub trait TaskSource {
    /// Fetch the full task list in feed order
    async fn fetch_tasks(&self) -> Result<Vec<Task>, LoadError>;
}
