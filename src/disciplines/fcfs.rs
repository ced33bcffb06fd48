//! First-come-first-served scheduling.
//!
//! # Algorithm
//!
//! 1. Order the workload by arrival time (ties by pid).
//! 2. For each process in order: if the clock trails its arrival, jump the
//!    clock forward (idle gap), then run the process to completion.
//!
//! Terminates after exactly one pass over the ordered workload, so no
//! iteration ceiling is needed.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use super::{ordered_by_arrival, Discipline, DisciplineRun};
use crate::models::{GanttEntry, Timeline, Workload};
use crate::trace::{SimEvent, Trace};

/// First-come-first-served: non-preemptive, arrival order.
///
/// Each process contributes exactly one execution interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn run_traced(&self, workload: &Workload, trace: &mut dyn Trace) -> DisciplineRun {
        let mut pending = ordered_by_arrival(workload);
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(workload.len());
        let mut clock: u64 = 0;

        while let Some(mut process) = pending.pop_front() {
            if clock < process.arrival_time {
                trace.record(SimEvent::IdleJump {
                    from: clock,
                    to: process.arrival_time,
                });
                clock = process.arrival_time;
            }

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

        DisciplineRun::conclude(timeline, completed, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttEntry;
    use crate::trace::EventLog;

    fn sample_workload() -> Workload {
        Workload::new()
            .with_process(0, 4)
            .with_process(1, 3)
            .with_process(2, 5)
    }

    #[test]
    fn test_fcfs_reference_timeline() {
        let run = Fcfs.run(&sample_workload());

        assert_eq!(
            run.timeline.entries(),
            &[
                GanttEntry::new(1, 0, 4),
                GanttEntry::new(2, 4, 7),
                GanttEntry::new(3, 7, 12),
            ]
        );
        assert!((run.metrics.avg_waiting - 8.0 / 3.0).abs() < 1e-9);
        assert!((run.metrics.avg_turnaround - 20.0 / 3.0).abs() < 1e-9);
        assert!(run.fault.is_none());
    }

    #[test]
    fn test_fcfs_one_interval_per_process() {
        let run = Fcfs.run(&sample_workload());
        for process in &run.completed {
            assert_eq!(run.timeline.interval_count(process.pid), 1);
            assert_eq!(run.timeline.service_time(process.pid), process.burst_time);
        }
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let workload = Workload::new().with_process(0, 2).with_process(10, 3);
        let mut log = EventLog::new();
        let run = Fcfs.run_traced(&workload, &mut log);

        assert_eq!(
            run.timeline.entries(),
            &[GanttEntry::new(1, 0, 2), GanttEntry::new(2, 10, 13)]
        );
        assert!(log
            .events()
            .contains(&SimEvent::IdleJump { from: 2, to: 10 }));
    }

    #[test]
    fn test_fcfs_arrival_ties_break_by_pid() {
        let workload = Workload::new().with_process(3, 2).with_process(3, 2);
        let run = Fcfs.run(&workload);
        assert_eq!(
            run.timeline.entries(),
            &[GanttEntry::new(1, 3, 5), GanttEntry::new(2, 5, 7)]
        );
    }

    #[test]
    fn test_fcfs_empty_workload() {
        let run = Fcfs.run(&Workload::new());
        assert!(run.timeline.is_empty());
        assert!(run.completed.is_empty());
        assert_eq!(run.metrics.avg_waiting, 0.0);
    }

    #[test]
    fn test_fcfs_completion_invariants() {
        let run = Fcfs.run(&sample_workload());
        for p in &run.completed {
            let completion = p.completion_time.unwrap();
            assert!(completion >= p.arrival_time + p.burst_time);
            assert_eq!(p.turnaround_time, completion - p.arrival_time);
            assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
        }
    }
}
