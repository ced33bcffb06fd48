//! Execution timeline model.
//!
//! A timeline is the ordered execution history of one discipline run: one
//! `GanttEntry` per contiguous span a process held the CPU. Non-preemptive
//! disciplines record one entry per process; preemptive disciplines record
//! one entry per slice.

use serde::{Deserialize, Serialize};

/// One contiguous execution span of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// The process that held the CPU.
    pub pid: u32,
    /// First tick of the span (inclusive).
    pub start: u64,
    /// First tick after the span (exclusive). Always greater than `start`.
    pub end: u64,
}

impl GanttEntry {
    /// Creates an entry. `end` must be greater than `start`.
    pub fn new(pid: u32, start: u64, end: u64) -> Self {
        debug_assert!(start < end, "empty gantt entry for pid {pid}");
        Self { pid, start, end }
    }

    /// Span length in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// The ordered execution history of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution span.
    pub fn record(&mut self, pid: u32, start: u64, end: u64) {
        self.entries.push(GanttEntry::new(pid, start, end));
    }

    /// The entries in execution order.
    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was executed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last tick of the run (0 for an empty timeline).
    pub fn span(&self) -> u64 {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> u64 {
        self.entries.iter().map(|e| e.duration()).sum()
    }

    /// Total ticks a given process held the CPU across all of its spans.
    pub fn service_time(&self, pid: u32) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.duration())
            .sum()
    }

    /// Number of spans recorded for a given process.
    pub fn interval_count(&self, pid: u32) -> usize {
        self.entries.iter().filter(|e| e.pid == pid).count()
    }

    /// A copy with adjacent contiguous spans of the same process merged.
    ///
    /// Unit-granularity disciplines record one entry per tick; rendering
    /// wants one bar per uninterrupted stretch.
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<GanttEntry> = Vec::with_capacity(self.entries.len());
        for &entry in &self.entries {
            match merged.last_mut() {
                Some(last) if last.pid == entry.pid && last.end == entry.start => {
                    last.end = entry.end;
                }
                _ => merged.push(entry),
            }
        }
        Timeline { entries: merged }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_duration() {
        let entry = GanttEntry::new(1, 2, 7);
        assert_eq!(entry.duration(), 5);
    }

    #[test]
    fn test_span_and_busy_time_with_idle_gap() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 4);
        timeline.record(2, 6, 9); // CPU idle over [4, 6)
        assert_eq!(timeline.span(), 9);
        assert_eq!(timeline.busy_time(), 7);
    }

    #[test]
    fn test_service_time_across_slices() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 2);
        timeline.record(2, 2, 4);
        timeline.record(1, 4, 6);
        assert_eq!(timeline.service_time(1), 4);
        assert_eq!(timeline.service_time(2), 2);
        assert_eq!(timeline.interval_count(1), 2);
    }

    #[test]
    fn test_coalesced_merges_contiguous_same_pid() {
        let mut timeline = Timeline::new();
        timeline.record(1, 0, 1);
        timeline.record(1, 1, 2);
        timeline.record(2, 2, 3);
        timeline.record(1, 5, 6); // Not contiguous with the first stretch.

        let merged = timeline.coalesced();
        assert_eq!(
            merged.entries(),
            &[
                GanttEntry::new(1, 0, 2),
                GanttEntry::new(2, 2, 3),
                GanttEntry::new(1, 5, 6),
            ]
        );
        // Coalescing preserves totals.
        assert_eq!(merged.busy_time(), timeline.busy_time());
        assert_eq!(merged.span(), timeline.span());
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.span(), 0);
        assert_eq!(timeline.busy_time(), 0);
    }
}
