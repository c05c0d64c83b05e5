//! Frontend Models
//!
//! Data structures matching the remote task feed.

use serde::{Deserialize, Serialize};

/// Feed-assigned task identifier. Any JSON integer the feed can send in
/// practice fits, negative ones included.
pub type TaskId = i64;

/// Task record as served by the feed.
///
/// Only `id` and `title` are required; any other fields in the payload
/// (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}
