//! Dispatching policies for the CPU simulator.
//!
//! A policy answers two questions at each decision point: which ready
//! process gets the CPU, and whether the running process must give it up.
//! The policies form the closed [`Algorithm`] enumeration; each one maps to
//! a scoring rule from [`rules`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::Algorithm;
//! use u_cpusched::models::{Process, ProcessSpec};
//!
//! let ready = vec![
//!     Process::new(&ProcessSpec::new("long", 0, 8)),
//!     Process::new(&ProcessSpec::new("short", 0, 2)),
//! ];
//! assert_eq!(Algorithm::Sjf.select(&ready), Some(1));
//! assert_eq!(Algorithm::Fcfs.select(&ready), Some(0));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
pub mod rules;

pub use algorithm::Algorithm;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Equal scores are resolved by the
/// caller in ready-queue order (first encountered wins).
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRPT").
    fn name(&self) -> &'static str;

    /// Scores a process in its current state.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
