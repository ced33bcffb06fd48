//! Priority scheduling, non-preemptive.
//!
//! Same arrival-gated admission loop as shortest-job-first, but selection
//! picks the lowest priority value among ready processes. A process without
//! a declared priority orders after every prioritized process — the ordering
//! is the tagged [`Process::priority_key`], not a numeric sentinel that real
//! data could collide with.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use super::{
    admit_arrivals, ordered_by_arrival, step_ceiling, take_min_by_key, Discipline, DisciplineRun,
    SimulationFault,
};
use crate::models::{GanttEntry, Process, Timeline, Workload};
use crate::trace::{SimEvent, Trace};

/// Priority scheduling: non-preemptive, lower value = more urgent.
///
/// Ties among equal or absent priorities break by earliest arrival, then pid.
/// Each process contributes exactly one execution interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl Discipline for PriorityScheduling {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (non-preemptive)"
    }

    fn run_traced(&self, workload: &Workload, trace: &mut dyn Trace) -> DisciplineRun {
        let mut pending = ordered_by_arrival(workload);
        let mut ready: Vec<Process> = Vec::new();
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(workload.len());
        let mut clock: u64 = 0;
        let mut fault = None;

        let ceiling = step_ceiling(workload);
        let mut iterations: u64 = 0;

        while !pending.is_empty() || !ready.is_empty() {
            iterations += 1;
            if iterations > ceiling {
                fault = Some(SimulationFault::IterationCeilingExceeded { limit: ceiling });
                break;
            }

            admit_arrivals(&mut pending, &mut ready, clock, trace);

            if ready.is_empty() {
                match pending.front() {
                    Some(next) => {
                        trace.record(SimEvent::IdleJump {
                            from: clock,
                            to: next.arrival_time,
                        });
                        clock = next.arrival_time;
                    }
                    None => break,
                }
                continue;
            }

            let Some(mut process) =
                take_min_by_key(&mut ready, |p| (p.priority_key(), p.arrival_time, p.pid))
            else {
                break;
            };

            let start = clock;
            clock += process.burst_time;
            process.complete_at(clock);
            timeline.record(process.pid, start, clock);
            trace.record(SimEvent::IntervalRecorded(GanttEntry::new(
                process.pid,
                start,
                clock,
            )));
            trace.record(SimEvent::Completed {
                pid: process.pid,
                time: clock,
            });
            completed.push(process);
        }

        DisciplineRun::conclude(timeline, completed, fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttEntry;

    #[test]
    fn test_priority_selects_lowest_value() {
        let workload = Workload::new()
            .with_prioritized(0, 4, 2)
            .with_prioritized(1, 3, 1)
            .with_prioritized(2, 5, 3);
        let run = PriorityScheduling.run(&workload);

        // P1 is alone at t=0; at t=4 both P2 (prio 1) and P3 (prio 3) are
        // ready and P2 wins.
        assert_eq!(
            run.timeline.entries(),
            &[
                GanttEntry::new(1, 0, 4),
                GanttEntry::new(2, 4, 7),
                GanttEntry::new(3, 7, 12),
            ]
        );
        assert!(run.fault.is_none());
    }

    #[test]
    fn test_priority_absent_sorts_after_declared() {
        let workload = Workload::new()
            .with_process(0, 2) // no priority
            .with_prioritized(0, 2, u32::MAX)
            .with_prioritized(0, 2, 0);
        let run = PriorityScheduling.run(&workload);

        let order: Vec<u32> = run.timeline.entries().iter().map(|e| e.pid).collect();
        // Declared priorities first (0 before u32::MAX), absent last — even
        // the largest representable value beats "no priority".
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn test_priority_ties_break_by_arrival_then_pid() {
        let workload = Workload::new()
            .with_prioritized(1, 2, 5)
            .with_prioritized(0, 2, 5)
            .with_prioritized(1, 2, 5);
        let run = PriorityScheduling.run(&workload);

        // All priority 5: arrival 0 first, then arrival-1 ties by pid.
        // P2 runs over [0,2); P1 and P3 are both ready by then.
        let order: Vec<u32> = run.timeline.entries().iter().map(|e| e.pid).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_priority_runs_to_completion_non_preemptively() {
        // An urgent late arrival waits for the running process to finish.
        let workload = Workload::new()
            .with_prioritized(0, 10, 5)
            .with_prioritized(1, 2, 0);
        let run = PriorityScheduling.run(&workload);

        assert_eq!(
            run.timeline.entries(),
            &[GanttEntry::new(1, 0, 10), GanttEntry::new(2, 10, 12)]
        );
        for process in &run.completed {
            assert_eq!(run.timeline.interval_count(process.pid), 1);
        }
    }

    #[test]
    fn test_priority_idle_gap_then_admission() {
        let workload = Workload::new()
            .with_prioritized(8, 1, 1)
            .with_prioritized(8, 1, 0);
        let run = PriorityScheduling.run(&workload);
        assert_eq!(
            run.timeline.entries(),
            &[GanttEntry::new(2, 8, 9), GanttEntry::new(1, 9, 10)]
        );
    }

    #[test]
    fn test_priority_empty_workload() {
        let run = PriorityScheduling.run(&Workload::new());
        assert!(run.timeline.is_empty());
        assert!(run.completed.is_empty());
        assert!(run.fault.is_none());
    }
}
