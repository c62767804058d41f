//! CPU scheduling simulator and run metrics.
//!
//! # Algorithm
//!
//! `Simulator` advances a single CPU one tick at a time, delegating every
//! selection and preemption decision to an [`Algorithm`](crate::dispatching::Algorithm).
//! Every tick produces an immutable [`SimulationStep`](crate::models::SimulationStep).
//!
//! # Metrics
//!
//! `SimulationMetrics` derives turnaround, waiting, response, utilization
//! and throughput from the final process records.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod engine;
mod metrics;

pub use engine::{simulate, SimulationOutcome, SimulationRequest, Simulator};
pub use metrics::SimulationMetrics;
