//! Scheduling engines and performance metrics.
//!
//! Two engines share one input contract (a list of [`ProcessDescriptor`])
//! and one output contract ([`Simulation`]):
//!
//! - **SRTF**: preemptive, re-selects the least-remaining-time process
//!   every time unit.
//! - **HRRN**: non-preemptive, picks the highest response ratio at each
//!   decision point and runs it to completion.
//!
//! Every run validates its input, works on a private copy of the process
//! records, and never touches the caller's descriptors, so repeated or
//! side-by-side runs are independent.
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessDescriptor;
//! use u_cpusched::scheduler::{simulate, Algorithm};
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 8),
//!     ProcessDescriptor::new(2, 1, 4),
//! ];
//! let sim = simulate(Algorithm::Srtf, &processes).unwrap();
//! assert_eq!(sim.result.elapsed_time, 12);
//! assert!((sim.result.cpu_utilization - 100.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod hrrn;
mod kpi;
mod srtf;

pub use kpi::SchedulingResult;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, ProcessId, ProcessState, Timeline};
use crate::validation::validate_processes;

/// Scheduling policy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Highest Response Ratio Next (non-preemptive).
    Hrrn,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Srtf, Algorithm::Hrrn];

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf)
    }

    /// Full policy name.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::Hrrn => "Highest Response Ratio Next",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Srtf => write!(f, "SRTF"),
            Algorithm::Hrrn => write!(f, "HRRN"),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `srtf`/`hrrn` (any case) or the menu numbers `1`/`2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srtf" | "1" => Ok(Algorithm::Srtf),
            "hrrn" | "2" => Ok(Algorithm::Hrrn),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Tunable simulation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// How equally-scored processes are ordered.
    pub tie_breaker: TieBreaker,
}

impl SimulationConfig {
    /// Creates the default configuration (input-order tie-breaking).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Algorithm that produced this run.
    pub algorithm: Algorithm,
    /// Aggregate metrics.
    pub result: SchedulingResult,
    /// Finalized process records, in input order.
    pub processes: Vec<ProcessState>,
    /// CPU run/idle slices in time order.
    pub timeline: Timeline,
}

impl Simulation {
    /// Looks up the record of a process.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessState> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Records sorted by process ID.
    pub fn processes_by_id(&self) -> Vec<&ProcessState> {
        let mut sorted: Vec<&ProcessState> = self.processes.iter().collect();
        sorted.sort_by_key(|p| p.id);
        sorted
    }

    /// Records ordered by `completion_time - burst_time`, the Gantt-chart
    /// ordering. Ties keep input order.
    pub fn execution_order(&self) -> Vec<&ProcessState> {
        let mut sorted: Vec<&ProcessState> = self.processes.iter().collect();
        sorted.sort_by_key(|p| p.completion_time - p.burst_time);
        sorted
    }
}

/// SRTF and HRRN runs over the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// SRTF run.
    pub srtf: Simulation,
    /// HRRN run.
    pub hrrn: Simulation,
}

impl Comparison {
    /// The run for `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> &Simulation {
        match algorithm {
            Algorithm::Srtf => &self.srtf,
            Algorithm::Hrrn => &self.hrrn,
        }
    }

    /// Algorithm with the lower average waiting time. Ties go to SRTF.
    pub fn best_by_waiting_time(&self) -> Algorithm {
        if self.hrrn.result.avg_waiting_time < self.srtf.result.avg_waiting_time {
            Algorithm::Hrrn
        } else {
            Algorithm::Srtf
        }
    }
}

/// Configured simulation runner.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::TieBreaker;
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::{Algorithm, Simulator};
///
/// let sim = Simulator::new(Algorithm::Hrrn)
///     .with_tie_breaker(TieBreaker::ById)
///     .run(&[ProcessDescriptor::new(1, 0, 5)])
///     .unwrap();
/// assert_eq!(sim.processes[0].completion_time, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    algorithm: Algorithm,
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            config: SimulationConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the tie-breaking rule.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.config.tie_breaker = tie_breaker;
        self
    }

    /// The algorithm this simulator runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Simulates `processes` to completion.
    ///
    /// # Errors
    /// - `InvalidInput` if validation fails, including a time horizon that
    ///   would overflow the clock; nothing is simulated.
    /// - `InternalInconsistency` if the engine reaches a state with pending
    ///   processes and no future arrival.
    pub fn run(&self, processes: &[ProcessDescriptor]) -> Result<Simulation, SimulationError> {
        validate_processes(processes)?;

        log::debug!(
            "{} simulation: {} processes, tie-breaker {:?}",
            self.algorithm,
            processes.len(),
            self.config.tie_breaker
        );

        let states = ProcessState::from_descriptors(processes);
        let output = match self.algorithm {
            Algorithm::Srtf => srtf::run(states, self.config.tie_breaker)?,
            Algorithm::Hrrn => hrrn::run(states, self.config.tie_breaker)?,
        };

        let result =
            SchedulingResult::calculate(&output.processes, output.elapsed_time, output.idle_time)?;

        log::debug!(
            "{} finished at t={} (idle={}, avg waiting={:.2})",
            self.algorithm,
            result.elapsed_time,
            result.idle_time,
            result.avg_waiting_time
        );

        Ok(Simulation {
            algorithm: self.algorithm,
            result,
            processes: output.processes,
            timeline: output.timeline,
        })
    }
}

/// Simulates `processes` under `algorithm` with the default configuration.
pub fn simulate(
    algorithm: Algorithm,
    processes: &[ProcessDescriptor],
) -> Result<Simulation, SimulationError> {
    Simulator::new(algorithm).run(processes)
}

/// Runs both algorithms on independent copies of `processes`.
pub fn compare(processes: &[ProcessDescriptor]) -> Result<Comparison, SimulationError> {
    Ok(Comparison {
        srtf: simulate(Algorithm::Srtf, processes)?,
        hrrn: simulate(Algorithm::Hrrn, processes)?,
    })
}

/// Raw engine output before metric aggregation.
#[derive(Debug)]
pub(crate) struct EngineOutput {
    pub(crate) processes: Vec<ProcessState>,
    pub(crate) timeline: Timeline,
    pub(crate) elapsed_time: i64,
    pub(crate) idle_time: i64,
}

/// Earliest arrival strictly after `t` among incomplete processes.
pub(crate) fn next_arrival(processes: &[ProcessState], t: i64) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_complete() && p.arrival_time > t)
        .map(|p| p.arrival_time)
        .min()
}
