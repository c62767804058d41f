//! Per-tick simulation snapshot.

use serde::{Deserialize, Serialize};

use super::{GanttInterval, Tick};

/// Snapshot of the scheduler at the end of one tick.
///
/// Steps are produced once per tick and never modified afterwards.
/// `gantt` holds every interval emitted up to and including this tick, so
/// any single step is enough to draw its frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Tick this snapshot describes.
    pub tick: Tick,
    /// Gantt intervals emitted so far.
    pub gantt: Vec<GanttInterval>,
    /// Ready-queue process IDs, head first.
    pub ready_queue: Vec<String>,
    /// Process holding the CPU after this tick, if any.
    pub running: Option<String>,
}

impl SimulationStep {
    /// Whether nothing is running and nothing is waiting to run.
    pub fn is_idle(&self) -> bool {
        self.running.is_none() && self.ready_queue.is_empty()
    }
}
