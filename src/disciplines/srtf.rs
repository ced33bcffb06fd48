//! Shortest-remaining-time-first scheduling (preemptive SJF).
//!
//! Time-sliced at one tick per step — the engine's finest granularity.
//!
//! # Algorithm (per step)
//!
//! 1. Admit newly arrived processes into the ready pool.
//! 2. If the running process has no remaining burst, complete it at the
//!    current clock and clear the slot.
//! 3. If the slot is empty and work is ready, install the candidate with the
//!    smallest remaining burst (ties: earliest arrival, then pid).
//! 4. If the slot is occupied and the pool holds a *strictly* shorter
//!    remaining burst, preempt. Equal remaining bursts never preempt.
//! 5. Execute one tick (one-tick gantt entry) or, with nothing runnable,
//!    jump the clock to the next arrival.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::{
    admit_arrivals, ordered_by_arrival, step_ceiling, take_min_by_key, Discipline, DisciplineRun,
    SimulationFault,
};
use crate::models::{GanttEntry, Process, Timeline, Workload};
use crate::trace::{SimEvent, Trace};

/// Shortest-remaining-time-first: preemptive, one-tick slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

fn remaining_key(p: &Process) -> (u64, u64, u32) {
    (p.remaining_burst, p.arrival_time, p.pid)
}

impl Discipline for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time-First (preemptive SJF)"
    }

    fn run_traced(&self, workload: &Workload, trace: &mut dyn Trace) -> DisciplineRun {
        let mut pending = ordered_by_arrival(workload);
        let mut ready: Vec<Process> = Vec::new();
        let mut running: Option<Process> = None;
        let mut timeline = Timeline::new();
        let mut completed = Vec::with_capacity(workload.len());
        let mut clock: u64 = 0;
        let mut fault = None;

        let ceiling = step_ceiling(workload);
        let mut steps: u64 = 0;

        while !pending.is_empty() || !ready.is_empty() || running.is_some() {
            steps += 1;
            if steps > ceiling {
                fault = Some(SimulationFault::IterationCeilingExceeded { limit: ceiling });
                break;
            }

            admit_arrivals(&mut pending, &mut ready, clock, trace);

            if running.as_ref().is_some_and(|p| p.remaining_burst == 0) {
                if let Some(mut finished) = running.take() {
                    finished.complete_at(clock);
                    trace.record(SimEvent::Completed {
                        pid: finished.pid,
                        time: clock,
                    });
                    completed.push(finished);
                }
            }

            if running.is_none() && !ready.is_empty() {
                running = take_min_by_key(&mut ready, remaining_key);
            } else if let Some(current) = running.take() {
                let shorter_ready = ready
                    .iter()
                    .map(|p| p.remaining_burst)
                    .min()
                    .is_some_and(|min_remaining| min_remaining < current.remaining_burst);

                if shorter_ready {
                    if let Some(challenger) = take_min_by_key(&mut ready, remaining_key) {
                        trace.record(SimEvent::Preempted {
                            preempted: current.pid,
                            installed: challenger.pid,
                            time: clock,
                        });
                        ready.push(current);
                        running = Some(challenger);
                    } else {
                        running = Some(current);
                    }
                } else {
                    running = Some(current);
                }
            }

            match running.as_mut() {
                Some(current) => {
                    timeline.record(current.pid, clock, clock + 1);
                    trace.record(SimEvent::IntervalRecorded(GanttEntry::new(
                        current.pid,
                        clock,
                        clock + 1,
                    )));
                    current.remaining_burst -= 1;
                    clock += 1;
                }
                None => match pending.front() {
                    Some(next) => {
                        trace.record(SimEvent::IdleJump {
                            from: clock,
                            to: next.arrival_time,
                        });
                        clock = next.arrival_time;
                    }
                    None => break,
                },
            }
        }

        DisciplineRun::conclude(timeline, completed, fault)
    }
}
