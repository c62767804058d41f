//! Process (job) model.
//!
//! A process is one simulated CPU-bound job. The caller describes it with a
//! [`ProcessSpec`]; the simulator turns each spec into a [`Process`] record
//! that accumulates state transitions, execution progress and completion
//! statistics over the course of a run.
//!
//! # Lifecycle
//!
//! ```text
//! New → Ready → Running ⇄ Ready → Terminated
//! ```
//!
//! `Waiting` exists for completeness but is never entered: simulated
//! processes have no I/O phase.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ProcessError;

/// Simulated time, in whole ticks from the start of the run (t=0).
pub type Tick = i64;

/// Caller-supplied description of a process.
///
/// Specs are validated by [`crate::validation::validate_request`] before a
/// run; the simulator itself assumes they are well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: Tick,
    /// Total CPU time required (ticks).
    pub burst: Tick,
    /// Scheduling priority (higher = more urgent). Only consulted by the
    /// Priority policy.
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a spec with priority 0.
    pub fn new(id: impl Into<String>, arrival: Tick, burst: Tick) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Process lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessState {
    New,
    Ready,
    Running,
    /// Reserved; no simulated process blocks on I/O.
    Waiting,
    Terminated,
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessState::New => "New",
            ProcessState::Ready => "Ready",
            ProcessState::Running => "Running",
            ProcessState::Waiting => "Waiting",
            ProcessState::Terminated => "Terminated",
        };
        f.write_str(name)
    }
}

/// One entry of a process's state history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Tick at which the state was entered.
    pub tick: Tick,
    /// State entered.
    pub state: ProcessState,
}

/// A process record and its accumulated history.
///
/// Identity fields are fixed at construction. Progress fields are only
/// changed through the mutators below, which the simulator calls; once a
/// run returns, records are handed out by shared reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    id: String,
    arrival: Tick,
    burst: Tick,
    priority: i32,
    remaining: Tick,
    state: ProcessState,
    history: Vec<StateTransition>,
    first_run: Option<Tick>,
    completion: Option<Tick>,
    turnaround: Option<Tick>,
    waiting: Option<Tick>,
}

impl Process {
    /// Creates a fresh record in state `New` with history `[(0, New)]`.
    pub fn new(spec: &ProcessSpec) -> Self {
        Self {
            id: spec.id.clone(),
            arrival: spec.arrival,
            burst: spec.burst,
            priority: spec.priority,
            remaining: spec.burst,
            state: ProcessState::New,
            history: vec![StateTransition {
                tick: 0,
                state: ProcessState::New,
            }],
            first_run: None,
            completion: None,
            turnaround: None,
            waiting: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    pub fn burst(&self) -> Tick {
        self.burst
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// CPU time not yet consumed.
    pub fn remaining(&self) -> Tick {
        self.remaining
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Ordered state history, starting with `(0, New)`.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Tick of the first dispatch, if the process has run.
    pub fn first_run(&self) -> Option<Tick> {
        self.first_run
    }

    /// Tick at which the last unit of work finished.
    pub fn completion(&self) -> Option<Tick> {
        self.completion
    }

    /// `completion - arrival`, once completed.
    pub fn turnaround(&self) -> Option<Tick> {
        self.turnaround
    }

    /// `turnaround - burst`, once completed.
    pub fn waiting(&self) -> Option<Tick> {
        self.waiting
    }

    /// `first_run - arrival`, once the process has run.
    pub fn response(&self) -> Option<Tick> {
        self.first_run.map(|t| t - self.arrival)
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    /// State in effect at `tick`, reconstructed from the history.
    ///
    /// Returns `New` for ticks before the first recorded entry.
    pub fn state_at(&self, tick: Tick) -> ProcessState {
        self.history
            .iter()
            .rev()
            .find(|t| t.tick <= tick)
            .map(|t| t.state)
            .unwrap_or(ProcessState::New)
    }

    /// Appends `(tick, state)` to the history and makes it current.
    pub fn record_transition(&mut self, tick: Tick, state: ProcessState) {
        debug_assert!(
            self.history.last().map_or(true, |t| t.tick <= tick),
            "history ticks must be non-decreasing"
        );
        self.history.push(StateTransition { tick, state });
        self.state = state;
    }

    /// Consumes `amount` ticks of remaining work.
    ///
    /// Returns the new remaining value, or an error if `amount` is negative
    /// or exceeds what is left.
    pub fn decrement(&mut self, amount: Tick) -> Result<Tick, ProcessError> {
        if amount < 0 || amount > self.remaining {
            return Err(ProcessError::InvalidDecrement {
                id: self.id.clone(),
                amount,
                remaining: self.remaining,
            });
        }
        self.remaining -= amount;
        Ok(self.remaining)
    }

    /// Records the first dispatch tick. Later calls are ignored.
    pub(crate) fn mark_first_run(&mut self, tick: Tick) {
        if self.first_run.is_none() {
            self.first_run = Some(tick);
        }
    }

    /// Marks the process finished at `tick` and derives its statistics.
    pub(crate) fn complete(&mut self, tick: Tick) {
        let turnaround = tick - self.arrival;
        self.completion = Some(tick);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround - self.burst);
        self.record_transition(tick, ProcessState::Terminated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = ProcessSpec::new("P1", 2, 5).with_priority(3);
        assert_eq!(spec.id, "P1");
        assert_eq!(spec.arrival, 2);
        assert_eq!(spec.burst, 5);
        assert_eq!(spec.priority, 3);
    }

    #[test]
    fn test_spec_priority_defaults_when_absent() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"id":"P0","arrival":0,"burst":4}"#).unwrap();
        assert_eq!(spec.priority, 0);
    }

    #[test]
    fn test_new_process() {
        let p = Process::new(&ProcessSpec::new("P0", 1, 3));
        assert_eq!(p.remaining(), 3);
        assert_eq!(p.state(), ProcessState::New);
        assert_eq!(
            p.history(),
            &[StateTransition {
                tick: 0,
                state: ProcessState::New
            }]
        );
        assert!(p.first_run().is_none());
        assert!(p.completion().is_none());
        assert!(!p.is_terminated());
    }

    #[test]
    fn test_decrement() {
        let mut p = Process::new(&ProcessSpec::new("P0", 0, 3));
        assert_eq!(p.decrement(1), Ok(2));
        assert_eq!(p.decrement(2), Ok(0));
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_decrement_beyond_remaining_fails() {
        let mut p = Process::new(&ProcessSpec::new("P0", 0, 1));
        let err = p.decrement(2).unwrap_err();
        assert_eq!(
            err,
            ProcessError::InvalidDecrement {
                id: "P0".into(),
                amount: 2,
                remaining: 1
            }
        );
        assert_eq!(p.remaining(), 1); // Unchanged
        assert!(p.decrement(-1).is_err());
    }

    #[test]
    fn test_complete_derives_statistics() {
        let mut p = Process::new(&ProcessSpec::new("P1", 1, 2));
        p.record_transition(1, ProcessState::Ready);
        p.record_transition(3, ProcessState::Running);
        p.mark_first_run(3);
        p.mark_first_run(4); // Ignored
        p.complete(5);

        assert!(p.is_terminated());
        assert_eq!(p.completion(), Some(5));
        assert_eq!(p.turnaround(), Some(4));
        assert_eq!(p.waiting(), Some(2));
        assert_eq!(p.response(), Some(2));
        assert_eq!(p.history().last().map(|t| t.tick), Some(5));
    }

    #[test]
    fn test_state_at() {
        let mut p = Process::new(&ProcessSpec::new("P0", 2, 1));
        p.record_transition(2, ProcessState::Ready);
        p.record_transition(4, ProcessState::Running);
        p.complete(5);

        assert_eq!(p.state_at(0), ProcessState::New);
        assert_eq!(p.state_at(1), ProcessState::New);
        assert_eq!(p.state_at(2), ProcessState::Ready);
        assert_eq!(p.state_at(3), ProcessState::Ready);
        assert_eq!(p.state_at(4), ProcessState::Running);
        assert_eq!(p.state_at(5), ProcessState::Terminated);
        assert_eq!(p.state_at(100), ProcessState::Terminated);
        assert_eq!(p.state_at(-1), ProcessState::New);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ProcessState::Running.to_string(), "Running");
        assert_eq!(ProcessState::Terminated.to_string(), "Terminated");
    }
}
