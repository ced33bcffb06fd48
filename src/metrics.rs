//! Simulation performance metrics.
//!
//! Computes standard scheduling performance indicators from the completed
//! process records of one discipline run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | CPU Utilization | Total burst / last completion, in percent |
//! | Throughput | Completed processes per tick of elapsed time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Aggregate performance indicators for one discipline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimMetrics {
    /// Mean waiting time across completed processes (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time across completed processes (ticks).
    pub avg_turnaround: f64,
    /// Fraction of elapsed time the CPU was executing bursts (0..100).
    pub cpu_utilization: f64,
    /// Completed processes per tick of elapsed time.
    pub throughput: f64,
}

impl SimMetrics {
    /// Computes metrics from completed process records.
    ///
    /// First rewrites `turnaround_time` and `waiting_time` on every completed
    /// record from its `completion_time` — a recomputation, not an
    /// accumulation, so calling once per run is safe regardless of what the
    /// fields held before. Records without a completion time contribute
    /// nothing to the aggregates.
    ///
    /// An empty input yields all-zero metrics rather than an error.
    pub fn calculate(processes: &mut [Process]) -> Self {
        let mut total_waiting: u64 = 0;
        let mut total_turnaround: u64 = 0;
        let mut total_burst: u64 = 0;
        let mut end_time: u64 = 0;
        let mut counted: usize = 0;

        for process in processes.iter_mut() {
            if let Some(completion) = process.completion_time {
                process.turnaround_time = completion - process.arrival_time;
                process.waiting_time = process.turnaround_time - process.burst_time;

                total_waiting += process.waiting_time;
                total_turnaround += process.turnaround_time;
                total_burst += process.burst_time;
                end_time = end_time.max(completion);
                counted += 1;
            }
        }

        if counted == 0 {
            return Self::default();
        }

        let avg_waiting = total_waiting as f64 / counted as f64;
        let avg_turnaround = total_turnaround as f64 / counted as f64;
        let cpu_utilization = if end_time > 0 {
            total_burst as f64 / end_time as f64 * 100.0
        } else {
            0.0
        };
        let throughput = if end_time > 0 {
            counted as f64 / end_time as f64
        } else {
            0.0
        };

        Self {
            avg_waiting,
            avg_turnaround,
            cpu_utilization,
            throughput,
        }
    }

    /// Combined score used by the comparison driver (lower is better).
    pub fn combined_delay(&self) -> f64 {
        self.avg_waiting + self.avg_turnaround
    }
}
