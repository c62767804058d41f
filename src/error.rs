//! Error types for simulation runs and metric computation.
//!
//! Input problems are reported as [`ValidationError`] lists before a run
//! starts. A run itself has no recoverable failure modes; the only other
//! error it can return is [`SimulationError::InvariantViolated`], which
//! indicates a defect in the engine rather than bad input.

use thiserror::Error;

use crate::models::Tick;
use crate::validation::ValidationError;

/// Errors returned by [`crate::scheduler::Simulator`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid simulation input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("simulation invariant violated: {0}")]
    InvariantViolated(#[from] ProcessError),
}

/// Errors raised by [`crate::models::Process`] mutators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("cannot consume {amount} tick(s) from process '{id}' with {remaining} remaining")]
    InvalidDecrement {
        id: String,
        amount: Tick,
        remaining: Tick,
    },
}

/// Errors returned by [`crate::scheduler::SimulationMetrics::calculate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("no processes to compute metrics over")]
    EmptyInput,

    #[error("latest completion tick is zero; metrics are undefined")]
    DegenerateTimeline,

    #[error("process '{0}' has not completed")]
    Unfinished(String),
}

/// Returned when parsing an unrecognized algorithm name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scheduling algorithm '{0}' (expected FCFS, SJF, SRTF, RR or PRIORITY)")]
pub struct UnknownAlgorithm(pub String);

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
