//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates classic single-CPU scheduling policies over a set of
//! synthetic processes and produces a deterministic, tick-by-tick trace
//! (state transitions, CPU occupancy, ready-queue contents) plus aggregate
//! performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessSpec`, `Process`, `GanttInterval`,
//!   `Timeline`, `SimulationStep`
//! - **`dispatching`**: Policies: `Algorithm` (FCFS, SJF, SRTF, RR,
//!   Priority) and their scoring rules
//! - **`scheduler`**: The tick-stepped `Simulator` and `SimulationMetrics`
//! - **`validation`**: Input checks run before every simulation
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::dispatching::Algorithm;
//! use u_cpusched::models::ProcessSpec;
//! use u_cpusched::scheduler::simulate;
//!
//! let processes = vec![
//!     ProcessSpec::new("P0", 0, 3),
//!     ProcessSpec::new("P1", 1, 2),
//!     ProcessSpec::new("P2", 2, 1),
//! ];
//! let outcome = simulate(&processes, Algorithm::RoundRobin, Some(2)).unwrap();
//! let metrics = outcome.metrics().unwrap();
//! assert_eq!(metrics.makespan, 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{MetricsError, ProcessError, SimulationError, UnknownAlgorithm};
