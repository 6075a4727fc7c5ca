//! CPU scheduling domain models.
//!
//! Provides the process data model shared by every scheduling engine and
//! the execution timeline produced by a run.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Immutable input: id, arrival, burst |
//! | `ProcessState` | Engine-owned working record and derived metrics |
//! | `Timeline` | Ordered run/idle slices of one simulation |

mod process;
mod timeline;

pub use process::{ProcessDescriptor, ProcessId, ProcessState};
pub use timeline::{ExecutionSlice, SliceKind, Timeline};
