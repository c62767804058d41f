//! Built-in dispatching rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | [`ArrivalOrder`] | arrival tick | FCFS |
//! | [`QueueOrder`] | constant | Round-Robin |
//! | [`ShortestRemaining`] | remaining ticks | SJF, SRTF |
//! | [`HighestPriority`] | negated priority | Priority |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Ties are left to the caller, which keeps ready-queue order.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First-come first-served by arrival tick.
///
/// Processes that arrived in the same tick keep their enqueue order.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival()
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival First"
    }
}

/// Pure queue order: every process scores the same, so the head wins.
#[derive(Debug, Clone, Copy)]
pub struct QueueOrder;

impl DispatchingRule for QueueOrder {
    fn name(&self) -> &'static str {
        "QUEUE"
    }

    fn evaluate(&self, _process: &Process) -> RuleScore {
        0
    }

    fn description(&self) -> &'static str {
        "Ready Queue Head"
    }
}

/// Least remaining work first.
///
/// For a process that has not yet run this is its burst, which makes the
/// rule serve both SJF (consulted only when the CPU is idle) and SRTF
/// (consulted every tick).
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining()
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// Numerically larger priority first.
///
/// Negated because lower score = dispatched first. Note this is the
/// opposite of the Unix "nice" convention where a smaller number wins.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -RuleScore::from(process.priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority Value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn make_process(id: &str, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(&ProcessSpec::new(id, arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_arrival_order() {
        let early = make_process("early", 1, 5, 0);
        let late = make_process("late", 4, 1, 0);
        assert!(ArrivalOrder.evaluate(&early) < ArrivalOrder.evaluate(&late));
    }

    #[test]
    fn test_queue_order_is_flat() {
        let a = make_process("a", 0, 9, 9);
        let b = make_process("b", 7, 1, 0);
        assert_eq!(QueueOrder.evaluate(&a), QueueOrder.evaluate(&b));
    }

    #[test]
    fn test_shortest_remaining_tracks_progress() {
        let mut long = make_process("long", 0, 5, 0);
        let short = make_process("short", 0, 3, 0);
        assert!(ShortestRemaining.evaluate(&short) < ShortestRemaining.evaluate(&long));

        long.decrement(3).unwrap();
        assert!(ShortestRemaining.evaluate(&long) < ShortestRemaining.evaluate(&short));
    }

    #[test]
    fn test_highest_priority() {
        let high = make_process("high", 0, 1, 5);
        let low = make_process("low", 0, 1, 1);
        assert!(HighestPriority.evaluate(&high) < HighestPriority.evaluate(&low));
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestRemaining.name(), "SRPT");
        assert_eq!(HighestPriority.description(), "Highest Priority Value");
    }
}
