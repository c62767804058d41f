//! Scheduling algorithm selection.
//!
//! Maps each supported algorithm to its scoring rule and preemption
//! behavior. Selection is always stable: among equally scored candidates,
//! the first one in ready-queue order wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{rules, DispatchingRule, RuleScore};
use crate::error::UnknownAlgorithm;
use crate::models::Process;

/// CPU scheduling algorithm.
///
/// | Variant | Selection | Preemption |
/// |---------|-----------|------------|
/// | `Fcfs` | earliest arrival | none |
/// | `Sjf` | least remaining, at idle points only | none |
/// | `Srtf` | least remaining | strictly shorter ready process |
/// | `RoundRobin` | queue head | quantum expiry |
/// | `Priority` | largest `priority` value | none |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// First-Come First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "RR", alias = "ROUNDROBIN")]
    RoundRobin,
    /// Non-preemptive priority scheduling (larger value runs first).
    Priority,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Short name (e.g., "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
            Algorithm::Priority => "PRIORITY",
        }
    }

    /// Long name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come First-Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::RoundRobin => "Round-Robin",
            Algorithm::Priority => "Priority",
        }
    }

    /// The rule that ranks ready processes under this algorithm.
    pub fn rule(&self) -> &'static dyn DispatchingRule {
        match self {
            Algorithm::Fcfs => &rules::ArrivalOrder,
            Algorithm::Sjf | Algorithm::Srtf => &rules::ShortestRemaining,
            Algorithm::RoundRobin => &rules::QueueOrder,
            Algorithm::Priority => &rules::HighestPriority,
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Whether a time quantum must be configured.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    /// Scores a process under this algorithm's rule.
    pub fn score(&self, process: &Process) -> RuleScore {
        self.rule().evaluate(process)
    }

    /// Picks the candidate to dispatch.
    ///
    /// `candidates` must be in ready-queue order. Returns the position of
    /// the lowest-scored candidate (first one on ties), or `None` if there
    /// are no candidates.
    pub fn select<'a, I>(&self, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a Process>,
    {
        candidates
            .into_iter()
            .enumerate()
            .min_by_key(|(_, p)| self.score(p))
            .map(|(pos, _)| pos)
    }

    /// Whether `running` must yield to one of `candidates`.
    ///
    /// Only SRTF preempts on arrival: it yields when some candidate has
    /// strictly less remaining work. Equal remaining keeps the incumbent.
    /// Round-Robin quantum expiry is time-based and handled by the
    /// simulator, not here.
    pub fn should_preempt<'a, I>(&self, running: &Process, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Process>,
    {
        match self {
            Algorithm::Srtf => {
                let incumbent = self.score(running);
                candidates
                    .into_iter()
                    .map(|p| self.score(p))
                    .min()
                    .is_some_and(|best| best < incumbent)
            }
            Algorithm::Fcfs | Algorithm::Sjf | Algorithm::RoundRobin | Algorithm::Priority => false,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses a case-insensitive algorithm name.
    ///
    /// Accepts the short names plus `round-robin`/`roundrobin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "RR" | "ROUNDROBIN" => Ok(Algorithm::RoundRobin),
            "PRIORITY" => Ok(Algorithm::Priority),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
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
    fn test_fcfs_selects_earliest_arrival() {
        let ready = vec![
            make_process("late", 3, 1, 0),
            make_process("early", 1, 9, 0),
        ];
        assert_eq!(Algorithm::Fcfs.select(&ready), Some(1));
    }

    #[test]
    fn test_round_robin_selects_head() {
        let ready = vec![
            make_process("late", 3, 9, 0),
            make_process("early", 0, 1, 9),
        ];
        assert_eq!(Algorithm::RoundRobin.select(&ready), Some(0));
    }

    #[test]
    fn test_sjf_selects_shortest_with_stable_ties() {
        let ready = vec![
            make_process("A", 0, 5, 0),
            make_process("B", 0, 2, 0),
            make_process("C", 0, 2, 0),
        ];
        assert_eq!(Algorithm::Sjf.select(&ready), Some(1)); // B before C
        assert_eq!(Algorithm::Srtf.select(&ready), Some(1));
    }

    #[test]
    fn test_priority_selects_largest_value() {
        let ready = vec![
            make_process("P0", 0, 1, 1),
            make_process("P1", 0, 1, 5),
            make_process("P2", 0, 1, 3),
        ];
        assert_eq!(Algorithm::Priority.select(&ready), Some(1));
    }

    #[test]
    fn test_score_follows_lower_runs_first() {
        let p = make_process("P0", 4, 7, 3);
        assert_eq!(Algorithm::Fcfs.score(&p), 4);
        assert_eq!(Algorithm::Sjf.score(&p), 7);
        assert_eq!(Algorithm::Srtf.score(&p), 7);
        assert_eq!(Algorithm::RoundRobin.score(&p), 0);
        assert_eq!(Algorithm::Priority.score(&p), -3);
    }

    #[test]
    fn test_select_empty() {
        let ready: Vec<Process> = Vec::new();
        for algo in Algorithm::ALL {
            assert!(algo.select(&ready).is_none());
        }
    }

    #[test]
    fn test_srtf_preempts_only_on_strictly_shorter() {
        let running = make_process("run", 0, 4, 0);
        let shorter = vec![make_process("s", 1, 3, 0)];
        let equal = vec![make_process("e", 1, 4, 0)];

        assert!(Algorithm::Srtf.should_preempt(&running, &shorter));
        assert!(!Algorithm::Srtf.should_preempt(&running, &equal));
        assert!(!Algorithm::Srtf.should_preempt(&running, &Vec::<Process>::new()));
    }

    #[test]
    fn test_non_preemptive_never_preempt() {
        let running = make_process("run", 0, 10, 0);
        let ready = vec![make_process("s", 1, 1, 99)];
        for algo in [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin,
            Algorithm::Priority,
        ] {
            assert!(!algo.should_preempt(&running, &ready), "{algo}");
        }
    }

    #[test]
    fn test_flags() {
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::RoundRobin.requires_quantum());
        assert!(!Algorithm::Fcfs.requires_quantum());
    }

    #[test]
    fn test_parse() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("SJF".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!("Srtf".parse::<Algorithm>(), Ok(Algorithm::Srtf));
        assert_eq!("rr".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("round-robin".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("Priority".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert_eq!(
            "lottery".parse::<Algorithm>(),
            Err(UnknownAlgorithm("lottery".into()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Algorithm::RoundRobin).unwrap(), "\"RR\"");
        assert_eq!(serde_json::to_string(&Algorithm::Priority).unwrap(), "\"PRIORITY\"");
        let parsed: Algorithm = serde_json::from_str("\"SRTF\"").unwrap();
        assert_eq!(parsed, Algorithm::Srtf);
    }
}
