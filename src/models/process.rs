//! Process model.
//!
//! A process is described by an immutable [`ProcessDescriptor`] supplied by
//! the caller. During a simulation run the engine works on a private
//! [`ProcessState`] per descriptor, which carries the mutable run-state and
//! the metrics derived at completion.
//!
//! # Lifecycle
//!
//! Unarrived → Eligible (arrival reached) → Running → Completed.
//! Under SRTF a running process may be preempted back to Eligible; under
//! HRRN a dispatched process always runs to completion.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier (positive, unique within one input list).
pub type ProcessId = u32;

/// Immutable description of a process to be scheduled.
///
/// All times are in abstract time units relative to t=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process needs.
    pub burst_time: i64,
}

impl ProcessDescriptor {
    /// Creates a new descriptor.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// Working record for one process during a simulation run.
///
/// Owned exclusively by the engine while a run is in progress. Derived
/// fields stay zero until the process completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// CPU time still required. Starts at `burst_time`.
    pub remaining_time: i64,
    /// Whether the process has been dispatched at least once.
    pub started: bool,
    /// First dispatch time minus arrival time.
    pub response_time: i64,
    /// Time at which the process finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessState {
    /// Creates a fresh working record from a descriptor.
    pub fn from_descriptor(descriptor: &ProcessDescriptor) -> Self {
        Self {
            id: descriptor.id,
            arrival_time: descriptor.arrival_time,
            burst_time: descriptor.burst_time,
            remaining_time: descriptor.burst_time,
            started: false,
            response_time: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Builds working records for every descriptor, preserving input order.
    pub fn from_descriptors(descriptors: &[ProcessDescriptor]) -> Vec<Self> {
        descriptors.iter().map(Self::from_descriptor).collect()
    }

    /// The descriptor this record was built from.
    pub fn descriptor(&self) -> ProcessDescriptor {
        ProcessDescriptor::new(self.id, self.arrival_time, self.burst_time)
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: i64) -> bool {
        self.arrival_time <= t
    }

    /// Whether the process has no remaining work.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Time of first dispatch, reconstructed from the response time.
    pub fn start_time(&self) -> i64 {
        self.arrival_time + self.response_time
    }

    /// Response ratio at time `t`: `((t - arrival) + burst) / burst`.
    ///
    /// Only meaningful once the process has arrived (`t >= arrival_time`).
    pub fn response_ratio(&self, t: i64) -> f64 {
        let waited = t - self.arrival_time;
        (waited + self.burst_time) as f64 / self.burst_time as f64
    }

    /// Records the first dispatch at time `t`. Later calls are ignored.
    pub(crate) fn mark_dispatched(&mut self, t: i64) {
        if !self.started {
            self.response_time = t - self.arrival_time;
            self.started = true;
        }
    }

    /// Runs the process for `units` of CPU time, saturating at zero.
    pub(crate) fn run_for(&mut self, units: i64) {
        self.remaining_time = (self.remaining_time - units).max(0);
    }

    /// Finalizes completion at time `t` and derives turnaround/waiting.
    pub(crate) fn complete_at(&mut self, t: i64) {
        self.remaining_time = 0;
        self.completion_time = t;
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

impl From<ProcessDescriptor> for ProcessState {
    fn from(descriptor: ProcessDescriptor) -> Self {
        Self::from_descriptor(&descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_descriptor() {
        let d = ProcessDescriptor::new(3, 2, 7);
        let s = ProcessState::from_descriptor(&d);
        assert_eq!(s.id, 3);
        assert_eq!(s.remaining_time, 7);
        assert!(!s.started);
        assert_eq!(s.completion_time, 0);
        assert_eq!(s.turnaround_time, 0);
        assert_eq!(s.waiting_time, 0);
        assert_eq!(s.response_time, 0);
        assert_eq!(s.descriptor(), d);
    }

    #[test]
    fn test_from_descriptors_keeps_order() {
        let ds = vec![
            ProcessDescriptor::new(2, 5, 1),
            ProcessDescriptor::new(1, 0, 3),
        ];
        let states = ProcessState::from_descriptors(&ds);
        assert_eq!(states.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn test_response_ratio() {
        let s = ProcessState::from(ProcessDescriptor::new(1, 2, 4));
        // Just arrived: (0 + 4) / 4 = 1.0
        assert!((s.response_ratio(2) - 1.0).abs() < 1e-10);
        // Waited 6: (6 + 4) / 4 = 2.5
        assert!((s.response_ratio(8) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_dispatch_recorded_once() {
        let mut s = ProcessState::from(ProcessDescriptor::new(1, 1, 4));
        s.mark_dispatched(3);
        s.mark_dispatched(9);
        assert!(s.started);
        assert_eq!(s.response_time, 2);
        assert_eq!(s.start_time(), 3);
    }

    #[test]
    fn test_run_and_complete() {
        let mut s = ProcessState::from(ProcessDescriptor::new(1, 1, 3));
        s.run_for(2);
        assert_eq!(s.remaining_time, 1);
        assert!(!s.is_complete());
        s.run_for(5);
        assert_eq!(s.remaining_time, 0);
        assert!(s.is_complete());

        s.complete_at(10);
        assert_eq!(s.completion_time, 10);
        assert_eq!(s.turnaround_time, 9);
        assert_eq!(s.waiting_time, 6);
    }

    #[test]
    fn test_has_arrived() {
        let s = ProcessState::from(ProcessDescriptor::new(1, 4, 1));
        assert!(!s.has_arrived(3));
        assert!(s.has_arrived(4));
        assert!(s.has_arrived(5));
    }
}
