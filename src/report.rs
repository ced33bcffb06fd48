//! Plain-text result rendering.
//!
//! Read-only consumers of engine outputs: a results table and a textual
//! timeline per discipline run, a key/value metrics block per discipline,
//! and a combined comparison report. Nothing here mutates a run.

use crate::comparison::Comparison;
use crate::disciplines::DisciplineRun;
use crate::metrics::SimMetrics;
use crate::models::{Process, Timeline};

/// Renders one metrics block as plain key/value text.
pub fn render_metrics(name: &str, metrics: &SimMetrics) -> String {
    format!(
        "discipline: {name}\n\
         avg_waiting: {:.2}\n\
         avg_turnaround: {:.2}\n\
         cpu_utilization: {:.2}\n\
         throughput: {:.4}\n",
        metrics.avg_waiting, metrics.avg_turnaround, metrics.cpu_utilization, metrics.throughput
    )
}

/// Renders a timeline as one text bar, contiguous same-process spans merged.
///
/// Example: `| P1 0..4 | P2 4..7 | P3 7..12 |`
pub fn render_timeline(timeline: &Timeline) -> String {
    let merged = timeline.coalesced();
    if merged.is_empty() {
        return "| (idle) |".to_string();
    }
    let mut out = String::from("|");
    for entry in merged.entries() {
        out.push_str(&format!(" P{} {}..{} |", entry.pid, entry.start, entry.end));
    }
    out
}

/// Renders completed process records as a fixed-width results table.
pub fn render_table(processes: &[Process]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:>8} {:>6} {:>9} {:>11} {:>11} {:>8}\n",
        "PID", "ARRIVAL", "BURST", "PRIORITY", "COMPLETION", "TURNAROUND", "WAITING"
    ));
    for p in processes {
        let priority = p
            .priority
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        let completion = p
            .completion_time
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        out.push_str(&format!(
            "{:<5} {:>8} {:>6} {:>9} {:>11} {:>11} {:>8}\n",
            format!("P{}", p.pid),
            p.arrival_time,
            p.burst_time,
            priority,
            completion,
            p.turnaround_time,
            p.waiting_time
        ));
    }
    out
}

/// Renders one discipline run: timeline, results table, metrics block.
pub fn render_run(name: &str, run: &DisciplineRun) -> String {
    let mut out = String::new();
    out.push_str(&render_timeline(&run.timeline));
    out.push('\n');
    out.push_str(&render_table(&run.completed));
    out.push_str(&render_metrics(name, &run.metrics));
    if let Some(fault) = run.fault {
        out.push_str(&format!("fault: {fault:?} (result incomplete)\n"));
    }
    out
}

/// Renders a full comparison: one block per discipline plus the winner.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    for entry in &comparison.entries {
        out.push_str(&render_run(entry.name, &entry.run));
        out.push('\n');
    }
    match comparison.best_entry() {
        Some(best) => out.push_str(&format!(
            "best: {} ({}), combined delay {:.2}\n",
            best.name,
            best.description,
            best.run.metrics.combined_delay()
        )),
        None => out.push_str("best: none (no reliable run)\n"),
    }
    out
}
