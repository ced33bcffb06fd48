//! Step-tracing hook for simulation runs.
//!
//! Disciplines announce well-defined simulation events through an injectable
//! observer instead of printing from inside their loops. The engine stays
//! silent by default (`NoTrace`); diagnostics layer narration on top by
//! implementing [`Trace`], and tests capture exact event sequences with
//! [`EventLog`].

use crate::models::GanttEntry;

/// A simulation event announced by a discipline loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A process crossed its arrival time into the ready pool.
    Admitted { pid: u32, time: u64 },
    /// The CPU had no ready work and the clock jumped to the next arrival.
    IdleJump { from: u64, to: u64 },
    /// An execution span was appended to the timeline.
    IntervalRecorded(GanttEntry),
    /// The running process was displaced by one with a shorter remaining
    /// burst.
    Preempted {
        preempted: u32,
        installed: u32,
        time: u64,
    },
    /// A process finished its entire burst.
    Completed { pid: u32, time: u64 },
}

/// Observer for [`SimEvent`]s.
///
/// Implementations must not influence scheduling decisions; the hook exists
/// for narration and inspection only.
pub trait Trace {
    /// Receives one event, in simulation order.
    fn record(&mut self, event: SimEvent);
}

/// The silent default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn record(&mut self, _event: SimEvent) {}
}

/// Collects every event, in order. Intended for tests and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SimEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in simulation order.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Number of recorded events of interest to a predicate.
    pub fn count_matching(&self, predicate: impl Fn(&SimEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Trace for EventLog {
    fn record(&mut self, event: SimEvent) {
        self.events.push(event);
    }
}
