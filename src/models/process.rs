//! Process model.
//!
//! A process is the unit of work the simulator schedules: a CPU burst that
//! becomes eligible at its arrival time and, for priority-based disciplines,
//! may carry a priority value.
//!
//! # Time Representation
//! All times are integer simulation ticks relative to t=0. The clock is
//! logical — it is advanced by the discipline loops, never sampled from a
//! real system.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// The workload description (`pid`, `arrival_time`, `burst_time`, `priority`)
/// is immutable after creation. The remaining fields are simulation state:
/// disciplines decrement `remaining_burst` and set `completion_time`; the
/// metrics pass derives `waiting_time` and `turnaround_time` afterwards.
///
/// # Invariants
/// For every completed process:
/// `turnaround_time = completion_time - arrival_time`,
/// `waiting_time = turnaround_time - burst_time`, and
/// `completion_time >= arrival_time + burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier within a workload (1-based, submission order).
    pub pid: u32,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: u64,
    /// Total CPU time required (ticks, >= 1).
    pub burst_time: u64,
    /// Scheduling priority (lower = more urgent). `None` = no priority;
    /// processes without one order after every prioritized process.
    pub priority: Option<u32>,
    /// CPU time still owed. Starts at `burst_time`, reaches 0 at completion.
    pub remaining_burst: u64,
    /// Tick at which the process finished. Set exactly once.
    pub completion_time: Option<u64>,
    /// Time spent ready but not running. Derived by the metrics pass.
    pub waiting_time: u64,
    /// Completion minus arrival. Derived by the metrics pass.
    pub turnaround_time: u64,
}

impl Process {
    /// Creates a new process with no priority.
    pub fn new(pid: u32, arrival_time: u64, burst_time: u64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: None,
            remaining_burst: burst_time,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has finished all of its burst.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Marks the process finished at `time`.
    pub(crate) fn complete_at(&mut self, time: u64) {
        debug_assert!(
            self.completion_time.is_none(),
            "process {} completed twice",
            self.pid
        );
        self.remaining_burst = 0;
        self.completion_time = Some(time);
    }

    /// Selection key for priority-based ordering.
    ///
    /// Declared priorities order by value; `None` orders strictly after every
    /// declared priority. Comparing keys never collides with real data the
    /// way a numeric infinity sentinel could.
    pub fn priority_key(&self) -> (bool, u32) {
        match self.priority {
            Some(value) => (false, value),
            None => (true, 0),
        }
    }
}
