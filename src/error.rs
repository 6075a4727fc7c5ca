//! Simulation error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engines.
///
/// No partial result accompanies an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process list was rejected before simulation began.
    ///
    /// Carries every problem found, not just the first.
    InvalidInput(Vec<ValidationError>),
    /// The CPU was idle with incomplete processes but no future arrival.
    ///
    /// Unreachable for validated input.
    InternalInconsistency {
        /// Virtual clock when the condition was detected.
        time: i64,
        /// Number of processes still incomplete.
        pending: usize,
    },
}

impl SimulationError {
    /// Whether this is an input rejection.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Validation errors carried by an input rejection.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::InternalInconsistency { .. } => &[],
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Self::InternalInconsistency { time, pending } => write!(
                f,
                "internal inconsistency at t={time}: {pending} process(es) incomplete with no future arrival"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
