//! Process selection for the CPU engines.
//!
//! A rule turns one process into a number; the [`Dispatcher`] walks the
//! processes in a fixed scan order and keeps the first one whose score no
//! later process strictly beats.
//!
//! # Score convention
//!
//! Scores are minimized. The two built-in rules map onto that as follows:
//!
//! | Rule | Score | Wins when |
//! |------|-------|-----------|
//! | [`rules::Srtf`] | remaining time | least work left |
//! | [`rules::Hrrn`] | negated response ratio | highest `(waited + burst) / burst` |
//!
//! The float score is for logs and ready-queue views. Selection goes through
//! [`DispatchingRule::compare`], which `Hrrn` answers with integer
//! cross-multiplication so nearly equal ratios are never merged.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, Dispatcher, SchedulingContext, TieBreaker};
//! use u_cpusched::models::{ProcessDescriptor, ProcessState};
//!
//! let processes = ProcessState::from_descriptors(&[
//!     ProcessDescriptor::new(1, 0, 8),
//!     ProcessDescriptor::new(2, 0, 4),
//! ]);
//! let dispatcher = Dispatcher::new(rules::Srtf, TieBreaker::InputOrder, &processes);
//! let best = dispatcher.select(&processes, &SchedulingContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{Dispatcher, TieBreaker};

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::ProcessState;

/// Score returned by a dispatching rule. Smaller is dispatched first.
pub type RuleScore = f64;

/// Priority rule consulted by the [`Dispatcher`].
pub trait DispatchingRule: Send + Sync + Debug {
    /// Short rule name used in logs ("SRTF", "HRRN").
    fn name(&self) -> &'static str;

    /// Score of `process` at the context's time; smaller runs first.
    fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> RuleScore;

    /// Orders two processes by priority. `Less` means `a` should run before `b`.
    ///
    /// Defaults to comparing [`evaluate`](Self::evaluate) scores. Rules whose
    /// scores are rounded quotients override this with an exact comparison.
    fn compare(&self, a: &ProcessState, b: &ProcessState, context: &SchedulingContext) -> Ordering {
        self.evaluate(a, context).total_cmp(&self.evaluate(b, context))
    }

    /// Long rule name.
    fn description(&self) -> &'static str {
        self.name()
    }
}
