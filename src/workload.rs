//! Synthetic workload generation.
//!
//! Produces random but reproducible process sets for demos, comparisons
//! between algorithms, and property tests. Pass a seeded RNG to get the
//! same workload on every run.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ProcessSpec, Tick};

/// Parameters of a random workload. All ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes (`P0`..`P{count-1}`).
    pub count: usize,
    /// Latest possible arrival tick (earliest is 0).
    pub max_arrival: Tick,
    /// Shortest possible burst.
    pub min_burst: Tick,
    /// Longest possible burst.
    pub max_burst: Tick,
    /// Lowest possible priority.
    pub min_priority: i32,
    /// Highest possible priority.
    pub max_priority: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 5,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: Tick, max_burst: Tick) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min_priority: i32, max_priority: i32) -> Self {
        self.min_priority = min_priority;
        self.max_priority = max_priority;
        self
    }

    /// Generates a workload.
    ///
    /// Inverted ranges collapse to their lower bound, and bursts and
    /// arrivals are clamped so the result always passes validation.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let min_priority = self.min_priority.max(0);
        let max_priority = self.max_priority.max(min_priority);

        (0..self.count)
            .map(|i| {
                ProcessSpec::new(
                    format!("P{i}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
                .with_priority(rng.random_range(min_priority..=max_priority))
            })
            .collect()
    }
}

/// Generates `count` processes with the default parameters.
pub fn random_processes<R: Rng>(count: usize, rng: &mut R) -> Vec<ProcessSpec> {
    WorkloadConfig::default().with_count(count).generate(rng)
}
