//! Simulation performance metrics.
//!
//! Computes the standard CPU-scheduling indicators from the final process
//! records of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion tick |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Response | Mean of first run - arrival |
//! | CPU Utilization | sum(burst) / makespan * 100 |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::models::{Process, Tick};

/// Aggregate performance indicators of a run.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Number of processes measured.
    pub process_count: usize,
    /// Latest completion tick.
    pub makespan: Tick,
    /// Sum of all bursts.
    pub total_burst: Tick,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time (first dispatch - arrival).
    pub avg_response: f64,
    /// Busy share of `[0, makespan)`, as a percentage (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl SimulationMetrics {
    /// Computes metrics over finalized process records.
    ///
    /// # Errors
    /// - [`MetricsError::EmptyInput`] if `processes` is empty.
    /// - [`MetricsError::Unfinished`] if any process lacks a completion or
    ///   first-run tick.
    /// - [`MetricsError::DegenerateTimeline`] if the latest completion is 0.
    pub fn calculate(processes: &[Process]) -> Result<Self, MetricsError> {
        if processes.is_empty() {
            return Err(MetricsError::EmptyInput);
        }

        let mut makespan: Tick = 0;
        let mut total_burst: Tick = 0;
        let mut total_turnaround: Tick = 0;
        let mut total_waiting: Tick = 0;
        let mut total_response: Tick = 0;

        for p in processes {
            let unfinished = || MetricsError::Unfinished(p.id().to_string());
            let completion = p.completion().ok_or_else(unfinished)?;
            let turnaround = p.turnaround().ok_or_else(unfinished)?;
            let waiting = p.waiting().ok_or_else(unfinished)?;
            let response = p.response().ok_or_else(unfinished)?;

            makespan = makespan.max(completion);
            total_burst += p.burst();
            total_turnaround += turnaround;
            total_waiting += waiting;
            total_response += response;
        }

        if makespan == 0 {
            return Err(MetricsError::DegenerateTimeline);
        }

        let n = processes.len() as f64;
        Ok(Self {
            process_count: processes.len(),
            makespan,
            total_burst,
            avg_turnaround: total_turnaround as f64 / n,
            avg_waiting: total_waiting as f64 / n,
            avg_response: total_response as f64 / n,
            cpu_utilization: total_burst as f64 / makespan as f64 * 100.0,
            throughput: n / makespan as f64,
        })
    }

    /// Ticks within `[0, makespan)` the CPU sat idle.
    pub fn idle_time(&self) -> Tick {
        self.makespan - self.total_burst
    }
}
