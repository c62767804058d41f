//! Input validation for simulation requests.
//!
//! Checks process specifications and algorithm parameters before a run.
//! Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival ticks
//! - Non-positive bursts
//! - Negative priorities
//! - Missing or non-positive Round-Robin quantum
//!
//! All problems are collected, so a caller can report every issue at once.

use std::collections::HashSet;
use thiserror::Error;

use crate::dispatching::Algorithm;
use crate::models::{ProcessSpec, Tick};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process ID is empty or whitespace.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before tick 0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// A process has a priority below 0.
    NegativePriority,
    /// Round-Robin was selected without a quantum.
    MissingQuantum,
    /// The Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. Every process ID is non-empty
/// 2. No duplicate process IDs (compared after trimming whitespace)
/// 3. `arrival >= 0`, `burst > 0`, `priority >= 0` for every process
/// 4. If `algorithm` is Round-Robin, `quantum` is present and positive
///
/// A quantum supplied for any other algorithm is ignored.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    processes: &[ProcessSpec],
    algorithm: Algorithm,
    quantum: Option<Tick>,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        let id = p.id.trim();
        if id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at index {index} has an empty ID"),
            ));
        } else if !ids.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst {}", p.id, p.burst),
            ));
        }

        if p.priority < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePriority,
                format!("Process '{}' has negative priority {}", p.id, p.priority),
            ));
        }
    }

    if algorithm.requires_quantum() {
        match quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingQuantum,
                format!("{algorithm} requires a time quantum"),
            )),
            Some(q) if q <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Time quantum must be positive, got {q}"),
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P0", 0, 3),
            ProcessSpec::new("P1", 1, 2).with_priority(4),
            ProcessSpec::new("P2", 2, 1),
        ]
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_request(&sample_processes(), Algorithm::Fcfs, None).is_ok());
        assert!(validate_request(&sample_processes(), Algorithm::RoundRobin, Some(2)).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_request(&[], Algorithm::Sjf, None).is_ok());
    }

    #[test]
    fn test_empty_id() {
        let procs = vec![ProcessSpec::new("", 0, 1), ProcessSpec::new("  ", 0, 1)];
        assert_eq!(
            kinds(validate_request(&procs, Algorithm::Fcfs, None)),
            vec![ValidationErrorKind::EmptyId, ValidationErrorKind::EmptyId]
        );
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![ProcessSpec::new("P0", 0, 1), ProcessSpec::new("P0", 3, 2)];
        let errors = validate_request(&procs, Algorithm::Fcfs, None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("P0"));
    }

    #[test]
    fn test_duplicate_id_ignores_surrounding_whitespace() {
        let procs = vec![ProcessSpec::new("P0", 0, 1), ProcessSpec::new(" P0 ", 1, 1)];
        assert_eq!(
            kinds(validate_request(&procs, Algorithm::Fcfs, None)),
            vec![ValidationErrorKind::DuplicateId]
        );
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![ProcessSpec::new("P0", -1, 1)];
        assert_eq!(
            kinds(validate_request(&procs, Algorithm::Fcfs, None)),
            vec![ValidationErrorKind::NegativeArrival]
        );
    }

    #[test]
    fn test_non_positive_burst() {
        let procs = vec![ProcessSpec::new("P0", 0, 0), ProcessSpec::new("P1", 0, -4)];
        assert_eq!(
            kinds(validate_request(&procs, Algorithm::Sjf, None)),
            vec![
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_negative_priority() {
        let procs = vec![ProcessSpec::new("P0", 0, 1).with_priority(-2)];
        assert_eq!(
            kinds(validate_request(&procs, Algorithm::Priority, None)),
            vec![ValidationErrorKind::NegativePriority]
        );
    }

    #[test]
    fn test_missing_quantum() {
        assert_eq!(
            kinds(validate_request(&sample_processes(), Algorithm::RoundRobin, None)),
            vec![ValidationErrorKind::MissingQuantum]
        );
    }

    #[test]
    fn test_non_positive_quantum() {
        assert_eq!(
            kinds(validate_request(&sample_processes(), Algorithm::RoundRobin, Some(0))),
            vec![ValidationErrorKind::NonPositiveQuantum]
        );
    }

    #[test]
    fn test_quantum_ignored_for_other_algorithms() {
        assert!(validate_request(&sample_processes(), Algorithm::Srtf, Some(-3)).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![
            ProcessSpec::new("", -1, 0),
            ProcessSpec::new("P1", 0, 2).with_priority(-1),
        ];
        let errors = validate_request(&procs, Algorithm::RoundRobin, None).unwrap_err();
        assert_eq!(errors.len(), 5);
    }
}
