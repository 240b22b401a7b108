//! Completion percentage.
//!
//! Only the completion flag counts. A noted-but-unchecked item satisfies the
//! export requirement yet does not move the percentage.

use std::fmt;

use serde::Serialize;

use crate::state::StateSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn from_snapshot(snapshot: &StateSnapshot<'_>) -> Self {
        Self {
            completed: snapshot.completed_count(),
            total: snapshot.len(),
        }
    }

    /// Completion in percent, rounded to two decimal places. An empty
    /// catalog is 0%.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.completed as f64 / self.total as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }
}

/// Renders as `55.56%`.
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percentage())
    }
}
