//! Scheduling disciplines.
//!
//! Each discipline consumes a workload and produces a [`DisciplineRun`]: the
//! execution timeline, the completed process records, and the aggregate
//! metrics. Disciplines are independent — every run operates on its own
//! snapshot of the workload.
//!
//! # Disciplines
//!
//! - **`Fcfs`**: First-come-first-served, non-preemptive
//! - **`Sjf`**: Shortest-job-first, non-preemptive
//! - **`Srtf`**: Shortest-remaining-time-first (preemptive SJF)
//! - **`RoundRobin`**: Quantum-sliced FIFO
//! - **`PriorityScheduling`**: Lowest priority value first, non-preemptive
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::disciplines::{Discipline, Fcfs};
//! use cpu_sched_sim::models::Workload;
//!
//! let workload = Workload::new().with_process(0, 4).with_process(1, 3);
//! let run = Fcfs.run(&workload);
//! assert_eq!(run.completed.len(), 2);
//! assert!(run.fault.is_none());
//! ```
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::metrics::SimMetrics;
use crate::models::{Process, Timeline, Workload};
use crate::trace::{NoTrace, SimEvent, Trace};

/// A fault detected during a simulation run.
///
/// Faults are reported, never silently swallowed: the run still returns the
/// partial completed set it accumulated, but callers must treat a faulted
/// result as unreliable rather than a valid simulation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationFault {
    /// The per-run iteration ceiling tripped before the workload drained.
    /// Indicates either a caller contract violation (e.g. a zero Round-Robin
    /// quantum) or an engine defect.
    IterationCeilingExceeded { limit: u64 },
}

/// The outputs of one discipline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplineRun {
    /// Execution spans in the order they were scheduled.
    pub timeline: Timeline,
    /// Process records that ran to completion, in completion order.
    pub completed: Vec<Process>,
    /// Aggregate metrics over the completed records.
    pub metrics: SimMetrics,
    /// Fault raised during the run, if any.
    pub fault: Option<SimulationFault>,
}

impl DisciplineRun {
    /// Finalizes a run: derives per-process and aggregate metrics over the
    /// completed set, then packages the outputs.
    pub(crate) fn conclude(
        timeline: Timeline,
        mut completed: Vec<Process>,
        fault: Option<SimulationFault>,
    ) -> Self {
        let metrics = SimMetrics::calculate(&mut completed);
        Self {
            timeline,
            completed,
            metrics,
            fault,
        }
    }

    /// Whether the run finished without a fault.
    pub fn is_reliable(&self) -> bool {
        self.fault.is_none()
    }
}

/// A scheduling discipline.
///
/// Implementations are pure: a run has no side effects beyond its returned
/// outputs, and re-running the same workload reproduces the same result.
pub trait Discipline {
    /// Short identifier (e.g. "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Runs the discipline over an independent snapshot of the workload.
    fn run(&self, workload: &Workload) -> DisciplineRun {
        self.run_traced(workload, &mut NoTrace)
    }

    /// Runs the discipline, announcing simulation events to `trace`.
    fn run_traced(&self, workload: &Workload, trace: &mut dyn Trace) -> DisciplineRun;
}

/// Snapshot of the workload ordered by arrival time (ties by pid).
pub(crate) fn ordered_by_arrival(workload: &Workload) -> VecDeque<Process> {
    let mut processes = workload.snapshot();
    processes.sort_by_key(|p| (p.arrival_time, p.pid));
    processes.into()
}

/// Moves every process with `arrival_time <= now` from the arrival-ordered
/// pending queue into the ready pool.
pub(crate) fn admit_arrivals(
    pending: &mut VecDeque<Process>,
    ready: &mut Vec<Process>,
    now: u64,
    trace: &mut dyn Trace,
) {
    while pending.front().is_some_and(|p| p.arrival_time <= now) {
        if let Some(process) = pending.pop_front() {
            trace.record(SimEvent::Admitted {
                pid: process.pid,
                time: now,
            });
            ready.push(process);
        }
    }
}

/// Removes and returns the pool entry minimizing `key`.
///
/// Keys must impose a total order (include the pid as the last component) so
/// selection is deterministic regardless of pool insertion order.
pub(crate) fn take_min_by_key<K: Ord>(
    pool: &mut Vec<Process>,
    key: impl Fn(&Process) -> K,
) -> Option<Process> {
    let index = pool
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| key(p))
        .map(|(index, _)| index)?;
    Some(pool.remove(index))
}

/// Iteration ceiling for one run over this workload.
///
/// On well-formed input every discipline loop iteration either executes burst
/// work (at most `total_burst` unit or quantum slices in aggregate), completes
/// a process (at most `len`), or jumps the clock to a strictly later arrival
/// (at most `len` idle jumps), so no run can legitimately iterate past
/// `total_burst + 2 * len + 2`. The ceiling is a defensive backstop, not a
/// termination path: tripping it raises
/// [`SimulationFault::IterationCeilingExceeded`].
pub(crate) fn step_ceiling(workload: &Workload) -> u64 {
    workload.total_burst() + 2 * workload.len() as u64 + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_by_arrival_ties_break_by_pid() {
        let workload = Workload::new()
            .with_process(5, 1)
            .with_process(0, 1)
            .with_process(5, 1);
        let pending = ordered_by_arrival(&workload);
        let pids: Vec<u32> = pending.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 1, 3]);
    }

    #[test]
    fn test_admit_arrivals_gates_on_clock() {
        let workload = Workload::new()
            .with_process(0, 1)
            .with_process(3, 1)
            .with_process(7, 1);
        let mut pending = ordered_by_arrival(&workload);
        let mut ready = Vec::new();

        admit_arrivals(&mut pending, &mut ready, 3, &mut NoTrace);
        let ready_pids: Vec<u32> = ready.iter().map(|p| p.pid).collect();
        assert_eq!(ready_pids, vec![1, 2]);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_take_min_by_key_is_deterministic() {
        let workload = Workload::new()
            .with_process(2, 4)
            .with_process(1, 4)
            .with_process(0, 9);
        let mut pool = workload.snapshot();

        // Equal bursts: earliest arrival wins.
        let chosen = take_min_by_key(&mut pool, |p| (p.burst_time, p.arrival_time, p.pid));
        assert_eq!(chosen.map(|p| p.pid), Some(2));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_take_min_from_empty_pool() {
        let mut pool: Vec<Process> = Vec::new();
        assert!(take_min_by_key(&mut pool, |p| p.pid).is_none());
    }

    #[test]
    fn test_step_ceiling_scales_with_workload() {
        let workload = Workload::new().with_process(0, 4).with_process(9, 3);
        assert_eq!(step_ceiling(&workload), 7 + 4 + 2);
        assert_eq!(step_ceiling(&Workload::new()), 2);
    }
}
