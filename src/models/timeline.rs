//! CPU occupancy timeline (Gantt chart data).
//!
//! The simulator emits one [`GanttInterval`] per executed tick. Intervals
//! are never coalesced in the stored timeline; [`Timeline::segments`]
//! merges contiguous runs on demand for display and analysis.

use serde::{Deserialize, Serialize};

use super::Tick;

/// A span during which one process occupied the CPU.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttInterval {
    /// Process that held the CPU.
    pub process_id: String,
    /// First tick of the span.
    pub start: Tick,
    /// Tick after the last one in the span.
    pub end: Tick,
}

impl GanttInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start: Tick, end: Tick) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the span in ticks.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.end - self.start
    }
}

/// Ordered sequence of Gantt intervals emitted by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in emission order (non-decreasing `start`).
    pub intervals: Vec<GanttInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: GanttInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Latest interval end, or 0 for an empty timeline.
    pub fn makespan(&self) -> Tick {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> Tick {
        self.intervals.iter().map(GanttInterval::duration).sum()
    }

    /// All intervals belonging to a process.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&GanttInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total ticks a process held the CPU.
    pub fn busy_time_for(&self, process_id: &str) -> Tick {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(GanttInterval::duration)
            .sum()
    }

    /// Contiguous same-process runs, merged.
    ///
    /// Two intervals merge when they belong to the same process and the
    /// second starts exactly where the first ends.
    pub fn segments(&self) -> Vec<GanttInterval> {
        let mut merged: Vec<GanttInterval> = Vec::new();
        for interval in &self.intervals {
            match merged.last_mut() {
                Some(last) if last.process_id == interval.process_id && last.end == interval.start => {
                    last.end = interval.end;
                }
                _ => merged.push(interval.clone()),
            }
        }
        merged
    }

    /// Process IDs in the order they took the CPU.
    ///
    /// One entry per segment: a process appears again each time it
    /// regains the CPU after another process or an idle gap.
    pub fn execution_order(&self) -> Vec<String> {
        self.segments().into_iter().map(|s| s.process_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(GanttInterval::new("P0", 0, 1));
        t.push(GanttInterval::new("P0", 1, 2));
        t.push(GanttInterval::new("P1", 2, 3));
        // Idle at tick 3
        t.push(GanttInterval::new("P1", 4, 5));
        t.push(GanttInterval::new("P0", 5, 6));
        t
    }

    #[test]
    fn test_interval_duration() {
        assert_eq!(GanttInterval::new("P0", 3, 4).duration(), 1);
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 6);
        assert_eq!(t.busy_time(), 5);
        assert_eq!(t.busy_time_for("P0"), 3);
        assert_eq!(t.busy_time_for("P1"), 2);
        assert_eq!(t.busy_time_for("P9"), 0);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn test_intervals_for() {
        let t = sample_timeline();
        let p1 = t.intervals_for("P1");
        assert_eq!(p1.len(), 2);
        assert_eq!(p1[1].start, 4);
    }

    #[test]
    fn test_segments_merge_contiguous_only() {
        let t = sample_timeline();
        let segs = t.segments();
        assert_eq!(
            segs,
            vec![
                GanttInterval::new("P0", 0, 2),
                GanttInterval::new("P1", 2, 3),
                GanttInterval::new("P1", 4, 5), // Gap splits the run
                GanttInterval::new("P0", 5, 6),
            ]
        );
    }

    #[test]
    fn test_execution_order() {
        let t = sample_timeline();
        assert_eq!(t.execution_order(), vec!["P0", "P1", "P1", "P0"]);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.segments().is_empty());
        assert!(t.execution_order().is_empty());
    }
}
