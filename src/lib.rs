//! Classical CPU-scheduling simulator.
//!
//! Simulates five textbook scheduling disciplines over a fixed, fully known
//! workload and reports per-process and aggregate performance metrics. Time
//! is an integer simulation clock advanced by the engine itself — this is an
//! offline, deterministic simulator, not a live scheduler.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Workload`, `GanttEntry`,
//!   `Timeline`
//! - **`metrics`**: Per-process and aggregate performance metrics
//!   (`SimMetrics`)
//! - **`disciplines`**: The five disciplines — `Fcfs`, `Sjf`, `Srtf`,
//!   `RoundRobin`, `PriorityScheduling` — behind the `Discipline` trait
//! - **`comparison`**: Side-by-side runs of all disciplines over one workload
//! - **`trace`**: Injectable step-tracing hook (`Trace`, `SimEvent`)
//! - **`validation`**: Caller-side input integrity checks
//! - **`report`**: Plain-text result rendering (tables, timelines, metrics)
//! - **`generator`**: Seeded random workload construction
//!
//! # Architecture
//!
//! Each discipline consumes its own independent snapshot of the workload, so
//! running several disciplines against the same input never cross-contaminates
//! state. A discipline run is a self-contained synchronous computation with no
//! side effects; step-by-step narration goes through the `trace` hook, never
//! through the algorithms' control flow.
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod comparison;
pub mod disciplines;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod report;
pub mod trace;
pub mod validation;
