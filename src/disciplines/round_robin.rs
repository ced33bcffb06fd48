//! Round-robin scheduling.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO queue with the entire workload in submission order.
//! 2. Pop the head. A process with nothing left is dropped (defensive no-op).
//! 3. If its remaining burst exceeds the quantum, run one full quantum and
//!    re-enqueue at the tail; otherwise run the remainder and complete it.
//!
//! Unlike the other disciplines, round robin does not gate readiness on
//! arrival time: every process is treated as ready at t=0. This preserves the
//! long-standing observed behavior; switch to the arrival-gated disciplines
//! for workloads where staggered arrivals matter.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use super::{step_ceiling, Discipline, DisciplineRun, SimulationFault};
use crate::models::{GanttEntry, Process, Timeline, Workload};
use crate::trace::{SimEvent, Trace};

/// Round robin: quantum-sliced FIFO.
///
/// No interval exceeds the quantum; a process's final interval equals its
/// remaining burst at that point.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: u64,
}

impl RoundRobin {
    /// Creates a round-robin discipline with the given time quantum.
    ///
    /// The quantum must be a positive integer; that contract belongs to the
    /// caller (see the `validation` module) and is not re-checked here. A
    /// zero quantum makes no progress and trips the iteration-ceiling
    /// backstop.
    pub fn new(quantum: u64) -> Self {
        Self { quantum }
    }
}

impl Discipline for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round Robin (quantum-sliced FIFO)"
    }

    fn run_traced(&self, workload: &Workload, trace: &mut dyn Trace) -> DisciplineRun {
        let mut queue: VecDeque<Process> = workload.snapshot().into();
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(workload.len());
        let mut clock: u64 = 0;
        let mut fault = None;

        let ceiling = step_ceiling(workload);
        let mut iterations: u64 = 0;

        while let Some(mut process) = queue.pop_front() {
            iterations += 1;
            if iterations > ceiling {
                fault = Some(SimulationFault::IterationCeilingExceeded { limit: ceiling });
                break;
            }

            if process.remaining_burst == 0 {
                continue;
            }

            let start = clock;
            if process.remaining_burst > self.quantum {
                clock += self.quantum;
                process.remaining_burst -= self.quantum;
                if clock > start {
                    timeline.record(process.pid, start, clock);
                    trace.record(SimEvent::IntervalRecorded(GanttEntry::new(
                        process.pid,
                        start,
                        clock,
                    )));
                }
                queue.push_back(process);
            } else {
                clock += process.remaining_burst;
                timeline.record(process.pid, start, clock);
                trace.record(SimEvent::IntervalRecorded(GanttEntry::new(
                    process.pid,
                    start,
                    clock,
                )));
                process.complete_at(clock);
                trace.record(SimEvent::Completed {
                    pid: process.pid,
                    time: clock,
                });
                completed.push(process);
            }
        }

        DisciplineRun::conclude(timeline, completed, fault)
    }
}
