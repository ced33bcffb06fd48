//! Side-by-side discipline comparison.
//!
//! Runs all five disciplines over the same workload — each on its own
//! independent snapshot — and selects the discipline minimizing
//! `avg_waiting + avg_turnaround`. Ties break by run order (first
//! encountered wins); the combined score is a documented convention, not a
//! claim of optimality across every metric.

use crate::disciplines::{
    Discipline, DisciplineRun, Fcfs, PriorityScheduling, RoundRobin, Sjf, Srtf,
};
use crate::models::Workload;

/// One discipline's outputs inside a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    /// Short discipline identifier (e.g. "FCFS").
    pub name: &'static str,
    /// Human-readable discipline description.
    pub description: &'static str,
    /// The run outputs.
    pub run: DisciplineRun,
}

/// Results of running every discipline over one workload.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Entries in run order: FCFS, SJF, SRTF, RR, PRIORITY.
    pub entries: Vec<ComparisonEntry>,
    /// Index of the best entry, if any run is eligible.
    ///
    /// Faulted runs are unreliable by contract and never selected; `None`
    /// means no reliable run exists.
    pub best: Option<usize>,
}

impl Comparison {
    /// Runs all five disciplines and scores them.
    ///
    /// `quantum` parameterizes the round-robin run and must be positive
    /// (the caller's contract — see the `validation` module).
    pub fn run(workload: &Workload, quantum: u64) -> Self {
        let disciplines: Vec<Box<dyn Discipline>> = vec![
            Box::new(Fcfs),
            Box::new(Sjf),
            Box::new(Srtf),
            Box::new(RoundRobin::new(quantum)),
            Box::new(PriorityScheduling),
        ];

        let entries: Vec<ComparisonEntry> = disciplines
            .iter()
            .map(|discipline| ComparisonEntry {
                name: discipline.name(),
                description: discipline.description(),
                run: discipline.run(workload),
            })
            .collect();

        let best = Self::select_best(&entries);
        Self { entries, best }
    }

    /// The winning entry, if any run is eligible.
    pub fn best_entry(&self) -> Option<&ComparisonEntry> {
        self.best.and_then(|index| self.entries.get(index))
    }

    fn select_best(entries: &[ComparisonEntry]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, entry) in entries.iter().enumerate() {
            if !entry.run.is_reliable() {
                continue;
            }
            let score = entry.run.metrics.combined_delay();
            match best {
                Some((_, incumbent)) if score >= incumbent => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }
}
