//! Input validation for process lists.
//!
//! Checks a descriptor list before any simulation starts. Detects:
//! - Empty input
//! - Duplicate or zero IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Time horizons (`latest arrival + total burst`) that overflow `i64`
//!
//! Every problem is reported, not only the first one found.

use std::collections::HashSet;

use crate::models::ProcessDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has ID zero.
    InvalidId,
    /// A process has burst time ≤ 0.
    NonPositiveBurst,
    /// A process has arrival time < 0.
    NegativeArrival,
    /// Metrics requested over a non-positive or inconsistent time span.
    InvalidHorizon,
    /// The latest arrival plus the total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate IDs
/// 3. IDs are positive
/// 4. Burst times are positive
/// 5. Arrival times are non-negative
/// 6. The clock cannot overflow: `max(arrival) + Σ burst` fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive",
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    // The clock never passes the latest arrival plus all remaining work.
    let latest_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .filter(|p| p.burst_time > 0)
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst time overflows i64"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
