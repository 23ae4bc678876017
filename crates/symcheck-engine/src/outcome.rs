//! Exploration outcomes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use symcheck_core::Counterexample;

/// Status of one exploration run.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExplorationStatus {
    /// Every explored path satisfied the property.
    Proven,

    /// At least one path violated it.
    Disproven,
}

impl ExplorationStatus {
    /// Whether the property held over the explored range.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, ExplorationStatus::Proven)
    }
}

/// Result of one exploration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationOutcome {
    /// Exploration status.
    pub status: ExplorationStatus,

    /// Violating inputs, in discovery order.
    pub counterexamples: Vec<Counterexample>,

    /// Number of execution paths the engine walked.
    pub paths_explored: u64,

    /// Wall-clock time of the run.
    pub duration: Duration,
}

impl ExplorationOutcome {
    /// Outcome of a run on which every path was clean.
    #[must_use]
    pub fn proven(paths_explored: u64, duration: Duration) -> Self {
        Self {
            status: ExplorationStatus::Proven,
            counterexamples: Vec::new(),
            paths_explored,
            duration,
        }
    }

    /// Outcome of a run that found violating inputs.
    #[must_use]
    pub fn disproven(
        counterexamples: Vec<Counterexample>,
        paths_explored: u64,
        duration: Duration,
    ) -> Self {
        Self {
            status: ExplorationStatus::Disproven,
            counterexamples,
            paths_explored,
            duration,
        }
    }

    /// The first counterexample found, if any.
    #[must_use]
    pub fn first_counterexample(&self) -> Option<&Counterexample> {
        self.counterexamples.first()
    }
}

impl fmt::Display for ExplorationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ExplorationStatus::Proven => {
                write!(
                    f,
                    "VERIFIED: {} paths clean in {:?}",
                    self.paths_explored, self.duration
                )
            }
            ExplorationStatus::Disproven => {
                write!(
                    f,
                    "FAILED: {} of {} paths violated the property",
                    self.counterexamples.len(),
                    self.paths_explored
                )?;
                for cex in &self.counterexamples {
                    write!(f, "\n  {cex}")?;
                }
                Ok(())
            }
        }
    }
}
