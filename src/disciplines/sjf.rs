//! Shortest-job-first scheduling, non-preemptive.
//!
//! # Algorithm
//!
//! 1. Keep two pools: not-yet-arrived (arrival-ordered) and ready.
//! 2. Each round, admit everything that has arrived by the clock.
//! 3. If nothing is ready, jump the clock to the earliest remaining arrival.
//! 4. Otherwise run the ready process with the smallest burst to completion
//!    (ties: earliest arrival, then pid).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::{
    admit_arrivals, ordered_by_arrival, step_ceiling, take_min_by_key, Discipline, DisciplineRun,
    SimulationFault,
};
use crate::models::{GanttEntry, Process, Timeline, Workload};
use crate::trace::{SimEvent, Trace};

/// Shortest-job-first: non-preemptive, smallest total burst wins.
///
/// Each process contributes exactly one execution interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Discipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
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
                take_min_by_key(&mut ready, |p| (p.burst_time, p.arrival_time, p.pid))
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
