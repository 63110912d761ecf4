//! Seed state for the external orchestrator (`state/*.json`).
//!
//! The wizard only writes these files once; reading them back is the
//! orchestrator's job. The loaders exist so the seeded shape can be checked.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Iteration bookkeeping (`state/iteration.json`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IterationState {
    /// Iterations completed so far.
    pub iteration: u32,
    /// Index of the next task in the implementation plan.
    pub task_index: u32,
}

/// Queue of deferred review items (`state/backlog-queue.json`).
///
/// Entries are opaque to this crate.
pub type BacklogQueue = Vec<Value>;

/// Serialize the initial iteration state.
pub fn initial_iteration_json() -> Result<String> {
    to_pretty_json(&IterationState::default())
}

/// Serialize the initial (empty) backlog queue.
pub fn initial_backlog_json() -> Result<String> {
    to_pretty_json(&BacklogQueue::new())
}

pub fn load_iteration_state(path: &Path) -> Result<IterationState> {
    debug!(path = %path.display(), "loading iteration state");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read iteration state {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse iteration state {}", path.display()))
}

pub fn load_backlog_queue(path: &Path) -> Result<BacklogQueue> {
    debug!(path = %path.display(), "loading backlog queue");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read backlog queue {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse backlog queue {}", path.display()))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = serde_json::to_string_pretty(value).context("serialize state json")?;
    buf.push('\n');
    Ok(buf)
}
