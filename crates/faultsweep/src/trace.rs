//! Checkpoint trace records.
//!
//! Every checkpoint evaluation appends a [`CheckpointEvent`] to its budget's
//! trace buffer, in control-flow order. The trace is observability only:
//! tests read it to see *which* checkpoint failed and how, and the sweep
//! report carries the successful attempt's trace. The rendering is not a
//! compatibility surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single checkpoint evaluation went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckpointOutcome {
    /// The real condition was true and no failure was injected.
    Pass,
    /// The real condition was false.
    Failed,
    /// The budget was exhausted; failure forced without evaluating the
    /// real condition.
    Injected,
}

impl fmt::Display for CheckpointOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckpointOutcome::Pass => write!(f, "pass"),
            CheckpointOutcome::Failed => write!(f, "fail"),
            CheckpointOutcome::Injected => write!(f, "inject"),
        }
    }
}

/// One checkpoint evaluation, as recorded in a budget's trace buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointEvent {
    /// Zero-based position of this checkpoint within the attempt.
    pub ordinal: u64,
    /// Human-readable description of the condition (stringified expression
    /// when the [`checkpoint!`](crate::checkpoint!) macro was used).
    pub label: String,
    /// `file:line` of the call site, when known.
    pub location: Option<String>,
    /// What happened.
    pub outcome: CheckpointOutcome,
}

impl fmt::Display for CheckpointEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "#{} {}:{} ({})", self.ordinal, self.outcome, self.label, loc),
            None => write!(f, "#{} {}:{}", self.ordinal, self.outcome, self.label),
        }
    }
}
