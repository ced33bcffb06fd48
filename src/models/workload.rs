//! Workload model.
//!
//! A workload is the complete, known-in-advance set of processes a simulation
//! run consumes. Its composition is fixed: no process is added or removed
//! mid-simulation. Pids are assigned by submission order, starting at 1.
//!
//! # Snapshot Semantics
//! Disciplines mutate simulation state on their process records, so each run
//! must own an independent copy. `snapshot()` is that copy; handing the same
//! `Workload` to five disciplines never cross-contaminates their results.

use serde::{Deserialize, Serialize};

use super::Process;

/// A finite, submission-ordered set of processes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits a process without a priority. Returns its assigned pid.
    pub fn submit(&mut self, arrival_time: u64, burst_time: u64) -> u32 {
        let pid = self.next_pid();
        self.processes.push(Process::new(pid, arrival_time, burst_time));
        pid
    }

    /// Submits a process with a priority (lower = more urgent).
    pub fn submit_with_priority(
        &mut self,
        arrival_time: u64,
        burst_time: u64,
        priority: u32,
    ) -> u32 {
        let pid = self.next_pid();
        self.processes
            .push(Process::new(pid, arrival_time, burst_time).with_priority(priority));
        pid
    }

    /// Builder form of [`submit`](Self::submit).
    pub fn with_process(mut self, arrival_time: u64, burst_time: u64) -> Self {
        self.submit(arrival_time, burst_time);
        self
    }

    /// Builder form of [`submit_with_priority`](Self::submit_with_priority).
    pub fn with_prioritized(mut self, arrival_time: u64, burst_time: u64, priority: u32) -> Self {
        self.submit_with_priority(arrival_time, burst_time, priority);
        self
    }

    /// The processes in submission order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// An independent copy of every process, for one discipline run.
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> u64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    fn next_pid(&self) -> u32 {
        self.processes.len() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pids_follow_submission_order() {
        let mut workload = Workload::new();
        assert_eq!(workload.submit(5, 2), 1);
        assert_eq!(workload.submit_with_priority(0, 3, 2), 2);
        assert_eq!(workload.submit(1, 1), 3);

        let pids: Vec<u32> = workload.processes().iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
    }

    #[test]
    fn test_builder_chain() {
        let workload = Workload::new()
            .with_process(0, 4)
            .with_prioritized(1, 3, 1)
            .with_process(2, 5);
        assert_eq!(workload.len(), 3);
        assert_eq!(workload.processes()[1].priority, Some(1));
        assert_eq!(workload.total_burst(), 12);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let workload = Workload::new().with_process(0, 4);
        let mut snapshot = workload.snapshot();
        snapshot[0].remaining_burst = 0;
        snapshot[0].completion_time = Some(4);

        // Original composition and state untouched.
        assert_eq!(workload.processes()[0].remaining_burst, 4);
        assert!(!workload.processes()[0].is_complete());
    }

    #[test]
    fn test_empty_workload() {
        let workload = Workload::new();
        assert!(workload.is_empty());
        assert_eq!(workload.total_burst(), 0);
        assert!(workload.snapshot().is_empty());
    }

    #[test]
    fn test_workload_from_json() {
        // Programmatic workload sources may hand over serialized workloads.
        let json = r#"{"processes":[
            {"pid":1,"arrival_time":0,"burst_time":4,"priority":2,
             "remaining_burst":4,"completion_time":null,
             "waiting_time":0,"turnaround_time":0},
            {"pid":2,"arrival_time":1,"burst_time":3,"priority":null,
             "remaining_burst":3,"completion_time":null,
             "waiting_time":0,"turnaround_time":0}
        ]}"#;
        let workload: Workload = serde_json::from_str(json).unwrap();
        assert_eq!(workload.len(), 2);
        assert_eq!(workload.processes()[0].priority, Some(2));
        assert_eq!(workload.processes()[1].priority, None);
    }
}
