//! Execution timeline model.
//!
//! A timeline is the ordered sequence of CPU intervals produced by one
//! simulation run: either a process running or the CPU sitting idle.
//! It is the raw material for Gantt-style rendering.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// What the CPU was doing during a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceKind {
    /// The given process held the CPU.
    Run(ProcessId),
    /// No process was eligible.
    Idle,
}

/// A contiguous CPU interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Activity during the interval.
    pub kind: SliceKind,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a run slice.
    pub fn run(id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            kind: SliceKind::Run(id),
            start,
            end,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            kind: SliceKind::Idle,
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// The running process, if any.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self.kind {
            SliceKind::Run(id) => Some(id),
            SliceKind::Idle => None,
        }
    }
}

/// Ordered, non-overlapping CPU slices covering `[0, makespan)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in time order.
    pub slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice, merging it into the previous one when both have
    /// the same kind and are contiguous. Empty slices are dropped.
    pub fn push(&mut self, slice: ExecutionSlice) {
        if slice.duration() <= 0 {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.kind == slice.kind && last.end == slice.start {
                last.end = slice.end;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// Records `process` running over `[start, end)`.
    pub fn record_run(&mut self, process: ProcessId, start: i64, end: i64) {
        self.push(ExecutionSlice::run(process, start, end));
    }

    /// Records the CPU idling over `[start, end)`.
    pub fn record_idle(&mut self, start: i64, end: i64) {
        self.push(ExecutionSlice::idle(start, end));
    }

    /// End of the last slice.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id().is_some())
            .map(|s| s.duration())
            .sum()
    }

    /// Total time spent idle.
    pub fn idle_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.kind == SliceKind::Idle)
            .map(|s| s.duration())
            .sum()
    }

    /// All run slices belonging to `process`.
    pub fn slices_for(&self, process: ProcessId) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.kind == SliceKind::Run(process))
            .collect()
    }

    /// Number of times the CPU moved from one process to a different one.
    ///
    /// Idle gaps are skipped: `P1, idle, P2` counts as one switch.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut previous: Option<ProcessId> = None;
        for id in self.slices.iter().filter_map(|s| s.process_id()) {
            if let Some(prev) = previous {
                if prev != id {
                    switches += 1;
                }
            }
            previous = Some(id);
        }
        switches
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record_run(1, 0, 1);
        t.record_run(2, 1, 5);
        t.record_idle(5, 7);
        t.record_run(1, 7, 14);
        t
    }

    #[test]
    fn test_merge_contiguous() {
        let mut t = Timeline::new();
        t.record_run(1, 0, 1);
        t.record_run(1, 1, 2);
        t.record_run(1, 2, 3);
        assert_eq!(t.len(), 1);
        assert_eq!(t.slices[0], ExecutionSlice::run(1, 0, 3));
    }

    #[test]
    fn test_no_merge_across_kinds() {
        let mut t = Timeline::new();
        t.record_run(1, 0, 2);
        t.record_idle(2, 3);
        t.record_idle(3, 4);
        t.record_run(1, 4, 5);
        assert_eq!(t.len(), 3);
        assert_eq!(t.slices[1], ExecutionSlice::idle(2, 4));
    }

    #[test]
    fn test_empty_slice_dropped() {
        let mut t = Timeline::new();
        t.record_idle(3, 3);
        assert!(t.is_empty());
    }

    #[test]
    fn test_totals() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 14);
        assert_eq!(t.busy_time(), 12);
        assert_eq!(t.idle_time(), 2);
    }

    #[test]
    fn test_slices_for() {
        let t = sample_timeline();
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.slices_for(2).len(), 1);
        assert!(t.slices_for(9).is_empty());
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        // 1 → 2 → (idle) → 1
        assert_eq!(t.context_switches(), 2);
        assert_eq!(Timeline::new().context_switches(), 0);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.idle_time(), 0);
    }
}
