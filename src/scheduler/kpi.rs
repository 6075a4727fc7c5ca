//! Scheduling performance metrics.
//!
//! Computes the standard uniprocessor scheduling indicators from the
//! finalized process records of one run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Σ(turnaround - burst) / n |
//! | Avg Turnaround | Σ(completion - arrival) / n |
//! | Avg Response | Σ(first dispatch - arrival) / n |
//! | CPU Utilization | (elapsed - idle) / elapsed × 100 |
//! | Throughput | n / elapsed |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::ProcessState;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Aggregate performance indicators of one simulation run.
///
/// All time values are in the same abstract units as the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Mean time spent eligible but not running.
    pub avg_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub avg_turnaround_time: f64,
    /// Percentage of elapsed time the CPU was busy (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response_time: f64,
    /// Final value of the virtual clock.
    pub elapsed_time: i64,
    /// Total time the CPU sat idle.
    pub idle_time: i64,
    /// Sum of all burst times.
    pub total_burst_time: i64,
    /// Number of processes.
    pub process_count: usize,
}

impl SchedulingResult {
    /// Computes metrics from completed process records.
    ///
    /// # Arguments
    /// * `processes` - Finalized process records (every process completed).
    /// * `elapsed_time` - Final virtual clock value.
    /// * `idle_time` - Accumulated idle time, `0 <= idle_time <= elapsed_time`.
    ///
    /// # Errors
    /// `InvalidInput` if `processes` is empty or the time horizon is not
    /// positive.
    pub fn calculate(
        processes: &[ProcessState],
        elapsed_time: i64,
        idle_time: i64,
    ) -> Result<Self, SimulationError> {
        if processes.is_empty() {
            return Err(SimulationError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::EmptyInput,
                "Cannot aggregate metrics over zero processes",
            )]));
        }
        if elapsed_time <= 0 || idle_time < 0 || idle_time > elapsed_time {
            return Err(SimulationError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::InvalidHorizon,
                format!("Invalid time horizon: elapsed={elapsed_time}, idle={idle_time}"),
            )]));
        }

        // Per-process times fit in i64; their sums may not.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_burst: i64 = 0;

        for p in processes {
            total_waiting += i128::from(p.waiting_time);
            total_turnaround += i128::from(p.turnaround_time);
            total_response += i128::from(p.response_time);
            total_burst = total_burst.saturating_add(p.burst_time);
        }

        let n = processes.len() as f64;
        let elapsed = elapsed_time as f64;

        Ok(Self {
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            cpu_utilization: (elapsed_time - idle_time) as f64 / elapsed * 100.0,
            throughput: n / elapsed,
            avg_response_time: total_response as f64 / n,
            elapsed_time,
            idle_time,
            total_burst_time: total_burst,
            process_count: processes.len(),
        })
    }

    /// Time the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.elapsed_time - self.idle_time
    }
}
