//! Tick-stepped CPU scheduling simulator.
//!
//! # Algorithm
//!
//! Each tick runs the following phases in order:
//!
//! 1. **Admit** every pending process with `arrival <= tick` (arrival
//!    order, input order on ties), appending it to the ready queue.
//! 2. **Preempt** (SRTF): move the running process to the ready-queue tail
//!    if a ready process has strictly less remaining work.
//! 3. **Expire** (Round-Robin): move the running process to the tail once
//!    its current time slice has reached the quantum.
//! 4. **Dispatch**: if the CPU is free, let the policy pick from the ready
//!    queue and start a fresh time slice.
//! 5. **Execute** one tick of the running process, emitting a Gantt
//!    interval `[tick, tick + 1)`.
//! 6. **Complete** the process if its remaining work reached zero
//!    (`completion = tick + 1`).
//! 7. **Snapshot** the tick.
//!
//! The loop ends once no process is pending, ready or running. A final
//! snapshot with an idle CPU is appended after the loop.
//!
//! # Complexity
//! O(T * n) where T = simulated ticks and n = processes; snapshots add
//! O(T²) memory because each one carries the Gantt chart so far.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

use super::SimulationMetrics;
use crate::dispatching::Algorithm;
use crate::error::{MetricsError, ProcessError, SimulationError};
use crate::models::{
    GanttInterval, Process, ProcessSpec, ProcessState, SimulationStep, Tick, Timeline,
};
use crate::validation::{validate_request, ValidationResult};

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<ProcessSpec>,
    /// Scheduling algorithm.
    pub algorithm: Algorithm,
    /// Round-Robin time quantum (ticks). Ignored by other algorithms.
    #[serde(default)]
    pub quantum: Option<Tick>,
}

impl SimulationRequest {
    /// Creates a new request without a quantum.
    pub fn new(processes: Vec<ProcessSpec>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Checks the request without running it.
    pub fn validate(&self) -> ValidationResult {
        validate_request(&self.processes, self.algorithm, self.quantum)
    }
}

/// Result of a completed run.
///
/// Read-only: all fields are exposed by shared reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationOutcome {
    algorithm: Algorithm,
    quantum: Option<Tick>,
    steps: Vec<SimulationStep>,
    processes: Vec<Process>,
    timeline: Timeline,
}

impl SimulationOutcome {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Quantum in effect (`None` unless Round-Robin).
    pub fn quantum(&self) -> Option<Tick> {
        self.quantum
    }

    /// Per-tick snapshots, ending with an idle terminal step.
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// Final process records, in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Complete Gantt timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Finds a process record by ID.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// The terminal snapshot.
    pub fn final_step(&self) -> Option<&SimulationStep> {
        self.steps.last()
    }

    /// Process IDs in the order they took the CPU.
    pub fn execution_order(&self) -> Vec<String> {
        self.timeline.execution_order()
    }

    /// Aggregate metrics over the final process records.
    pub fn metrics(&self) -> Result<SimulationMetrics, MetricsError> {
        SimulationMetrics::calculate(&self.processes)
    }

    /// Splits the outcome into its steps and process records.
    pub fn into_parts(self) -> (Vec<SimulationStep>, Vec<Process>) {
        (self.steps, self.processes)
    }
}

/// Deterministic single-CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::Algorithm;
/// use u_cpusched::models::ProcessSpec;
/// use u_cpusched::scheduler::Simulator;
///
/// let processes = vec![
///     ProcessSpec::new("P0", 0, 3),
///     ProcessSpec::new("P1", 1, 2),
///     ProcessSpec::new("P2", 2, 1),
/// ];
/// let outcome = Simulator::new(Algorithm::Fcfs).run(&processes).unwrap();
/// assert_eq!(outcome.execution_order(), vec!["P0", "P1", "P2"]);
/// assert_eq!(outcome.process("P2").unwrap().completion(), Some(6));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    algorithm: Algorithm,
    quantum: Option<Tick>,
}

impl Simulator {
    /// Creates a simulator for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Tick) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Creates a simulator configured from a request.
    pub fn from_request(request: &SimulationRequest) -> Self {
        Self {
            algorithm: request.algorithm,
            quantum: request.quantum,
        }
    }

    /// Runs a full simulation.
    ///
    /// Validates `specs` first; on failure no simulation is performed and
    /// every validation problem is returned.
    pub fn run(&self, specs: &[ProcessSpec]) -> Result<SimulationOutcome, SimulationError> {
        validate_request(specs, self.algorithm, self.quantum)?;

        let quantum = self.quantum.filter(|_| self.algorithm.requires_quantum());
        info!(
            algorithm = %self.algorithm,
            processes = specs.len(),
            quantum = ?quantum,
            "starting simulation"
        );

        let mut run = Run::new(self.algorithm, quantum, specs);
        while !run.is_finished() {
            run.step()?;
        }
        run.finalize();

        info!(
            algorithm = %self.algorithm,
            ticks = run.tick,
            makespan = run.timeline.makespan(),
            "simulation finished"
        );
        Ok(run.into_outcome())
    }

    /// Runs a request with its own algorithm and quantum.
    pub fn run_request(request: &SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
        Self::from_request(request).run(&request.processes)
    }
}

/// Runs a simulation in one call.
///
/// Equivalent to `Simulator::new(algorithm)` with an optional quantum.
pub fn simulate(
    processes: &[ProcessSpec],
    algorithm: Algorithm,
    quantum: Option<Tick>,
) -> Result<SimulationOutcome, SimulationError> {
    Simulator {
        algorithm,
        quantum,
    }
    .run(processes)
}

/// Mutable state of one run. Processes are referenced by index.
struct Run {
    algorithm: Algorithm,
    quantum: Option<Tick>,
    processes: Vec<Process>,
    /// Not yet arrived, sorted by arrival (input order on ties).
    pending: VecDeque<usize>,
    ready: VecDeque<usize>,
    running: Option<usize>,
    /// Ticks the running process has used since its last dispatch.
    slice: Tick,
    tick: Tick,
    timeline: Timeline,
    steps: Vec<SimulationStep>,
}

impl Run {
    fn new(algorithm: Algorithm, quantum: Option<Tick>, specs: &[ProcessSpec]) -> Self {
        let processes: Vec<Process> = specs.iter().map(Process::new).collect();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        pending.sort_by_key(|&i| processes[i].arrival()); // Stable

        Self {
            algorithm,
            quantum,
            processes,
            pending: pending.into(),
            ready: VecDeque::new(),
            running: None,
            slice: 0,
            tick: 0,
            timeline: Timeline::new(),
            steps: Vec::new(),
        }
    }

    fn is_finished(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty() && self.running.is_none()
    }

    fn step(&mut self) -> Result<(), ProcessError> {
        self.admit_arrivals();
        self.check_preemption();
        self.check_quantum();
        self.dispatch();
        self.execute()?;
        self.snapshot();
        self.tick += 1;
        Ok(())
    }

    fn admit_arrivals(&mut self) {
        while let Some(&idx) = self.pending.front() {
            if self.processes[idx].arrival() > self.tick {
                break;
            }
            self.pending.pop_front();
            let process = &mut self.processes[idx];
            process.record_transition(self.tick, ProcessState::Ready);
            debug!(tick = self.tick, id = process.id(), "admitted");
            self.ready.push_back(idx);
        }
    }

    fn check_preemption(&mut self) {
        let Some(current) = self.running else {
            return;
        };
        let candidates = self.ready.iter().map(|&i| &self.processes[i]);
        if self
            .algorithm
            .should_preempt(&self.processes[current], candidates)
        {
            debug!(
                tick = self.tick,
                id = self.processes[current].id(),
                "preempted by shorter job"
            );
            self.preempt(current);
        }
    }

    fn check_quantum(&mut self) {
        let (Some(current), Some(quantum)) = (self.running, self.quantum) else {
            return;
        };
        if self.slice >= quantum {
            debug!(
                tick = self.tick,
                id = self.processes[current].id(),
                slice = self.slice,
                "quantum expired"
            );
            self.preempt(current);
        }
    }

    /// Returns the running process to the ready-queue tail.
    fn preempt(&mut self, idx: usize) {
        self.processes[idx].record_transition(self.tick, ProcessState::Ready);
        self.ready.push_back(idx);
        self.running = None;
        self.slice = 0;
    }

    fn dispatch(&mut self) {
        if self.running.is_some() {
            return;
        }
        let candidates = self.ready.iter().map(|&i| &self.processes[i]);
        let Some(idx) = self
            .algorithm
            .select(candidates)
            .and_then(|pos| self.ready.remove(pos))
        else {
            return;
        };

        let process = &mut self.processes[idx];
        process.record_transition(self.tick, ProcessState::Running);
        debug!(
            tick = self.tick,
            id = process.id(),
            remaining = process.remaining(),
            "dispatched"
        );
        self.running = Some(idx);
        self.slice = 0;
    }

    fn execute(&mut self) -> Result<(), ProcessError> {
        let Some(current) = self.running else {
            return Ok(());
        };
        let tick = self.tick;
        let process = &mut self.processes[current];

        process.mark_first_run(tick);
        let remaining = process.decrement(1)?;
        self.timeline
            .push(GanttInterval::new(process.id(), tick, tick + 1));
        self.slice += 1;

        if remaining == 0 {
            process.complete(tick + 1);
            debug!(
                tick,
                id = process.id(),
                turnaround = ?process.turnaround(),
                waiting = ?process.waiting(),
                "completed"
            );
            self.running = None;
        }
        Ok(())
    }

    fn snapshot(&mut self) {
        let step = SimulationStep {
            tick: self.tick,
            gantt: self.timeline.intervals.clone(),
            ready_queue: self
                .ready
                .iter()
                .map(|&i| self.processes[i].id().to_string())
                .collect(),
            running: self.running.map(|i| self.processes[i].id().to_string()),
        };
        self.steps.push(step);
    }

    /// Closes out any unfinished process and appends the idle final frame.
    fn finalize(&mut self) {
        for process in self.processes.iter_mut().filter(|p| !p.is_terminated()) {
            warn!(
                tick = self.tick,
                id = process.id(),
                "process still active after loop; forcing termination"
            );
            process.complete(self.tick);
        }

        self.steps.push(SimulationStep {
            tick: self.tick,
            gantt: self.timeline.intervals.clone(),
            ready_queue: Vec::new(),
            running: None,
        });
    }

    fn into_outcome(self) -> SimulationOutcome {
        SimulationOutcome {
            algorithm: self.algorithm,
            quantum: self.quantum,
            steps: self.steps,
            processes: self.processes,
            timeline: self.timeline,
        }
    }
}
