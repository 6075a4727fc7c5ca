//! Uniprocessor CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Simulates a fixed set of processes (arrival time, burst time) on a
//! single CPU and reports waiting, turnaround and response times together
//! with CPU utilization and throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ProcessState`, `Timeline`
//! - **`validation`**: Input integrity checks (empty input, duplicate IDs, bad times)
//! - **`dispatching`**: Selection rules (SRTF, HRRN) and deterministic tie-breaking
//! - **`scheduler`**: The SRTF and HRRN engines, `simulate`, metrics
//! - **`workload`**: Seeded synthetic workloads
//!
//! # Quick Start
//!
//! ```
//! use u_cpusched::models::ProcessDescriptor;
//! use u_cpusched::scheduler::{compare, Algorithm};
//!
//! let processes = vec![
//!     ProcessDescriptor::new(1, 0, 8),
//!     ProcessDescriptor::new(2, 1, 4),
//!     ProcessDescriptor::new(3, 2, 9),
//!     ProcessDescriptor::new(4, 3, 5),
//! ];
//! let cmp = compare(&processes).unwrap();
//! assert!((cmp.srtf.result.avg_waiting_time - 6.5).abs() < 1e-10);
//! assert_eq!(cmp.best_by_waiting_time(), Algorithm::Srtf);
//! ```
//!
//! The engines never print. Dispatch decisions are emitted through the
//! `log` facade at `trace` level and run summaries at `debug` level.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{ProcessDescriptor, ProcessState};
pub use scheduler::{simulate, Algorithm, SchedulingResult, Simulation};
