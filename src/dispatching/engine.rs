//! Process selection under a dispatching rule.
//!
//! The dispatcher scans processes in a fixed order and keeps the first
//! process with the strictly best score, so ties always go to whichever
//! process comes earlier in that order.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DispatchingRule, SchedulingContext};
use crate::models::ProcessState;

/// Order in which equally-scored processes are preferred.
///
/// Changing the tie-breaker changes results only for inputs where two
/// eligible processes share the same selection score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Earliest in the caller's input list wins.
    #[default]
    InputOrder,
    /// Earliest arrival wins; equal arrivals fall back to input order.
    ArrivalTime,
    /// Lowest process ID wins.
    ById,
}

impl TieBreaker {
    /// Returns indices into `processes` in preference order.
    pub fn scan_order(&self, processes: &[ProcessState]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        match self {
            TieBreaker::InputOrder => {}
            // sort_by_key is stable, so input order survives among equals
            TieBreaker::ArrivalTime => order.sort_by_key(|&i| processes[i].arrival_time),
            TieBreaker::ById => order.sort_by_key(|&i| processes[i].id),
        }
        order
    }
}

/// Selects the next process to run.
///
/// Built once per simulation run over that run's process list; the scan
/// order is fixed at construction.
#[derive(Clone)]
pub struct Dispatcher {
    rule: Arc<dyn DispatchingRule>,
    order: Vec<usize>,
}

impl Dispatcher {
    /// Creates a dispatcher for `processes` using `rule`.
    pub fn new<R: DispatchingRule + 'static>(
        rule: R,
        tie_breaker: TieBreaker,
        processes: &[ProcessState],
    ) -> Self {
        Self {
            rule: Arc::new(rule),
            order: tie_breaker.scan_order(processes),
        }
    }

    /// Name of the underlying rule.
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Long name of the underlying rule.
    pub fn rule_description(&self) -> &'static str {
        self.rule.description()
    }

    /// Whether `process` may be dispatched at the context's time.
    #[inline]
    pub fn is_eligible(process: &ProcessState, context: &SchedulingContext) -> bool {
        process.has_arrived(context.current_time) && !process.is_complete()
    }

    /// Returns the index of the best eligible process, or `None` if no
    /// process is eligible.
    ///
    /// The running best is replaced only by a strictly better score.
    pub fn select(&self, processes: &[ProcessState], context: &SchedulingContext) -> Option<usize> {
        let mut best: Option<(usize, &ProcessState)> = None;

        for &idx in &self.order {
            let Some(process) = processes.get(idx) else {
                continue;
            };
            if !Self::is_eligible(process, context) {
                continue;
            }

            let better = match best {
                Some((_, current)) => self.rule.compare(process, current, context) == Ordering::Less,
                None => true,
            };
            if better {
                best = Some((idx, process));
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// Eligible processes sorted by priority (best first).
    ///
    /// The sort is stable over the scan order, so the first entry always
    /// equals [`Dispatcher::select`].
    pub fn ready_queue(&self, processes: &[ProcessState], context: &SchedulingContext) -> Vec<usize> {
        let mut ready: Vec<(usize, &ProcessState)> = self
            .order
            .iter()
            .filter_map(|&idx| processes.get(idx).map(|p| (idx, p)))
            .filter(|(_, p)| Self::is_eligible(p, context))
            .collect();

        ready.sort_by(|a, b| self.rule.compare(a.1, b.1, context));

        ready.into_iter().map(|(idx, _)| idx).collect()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rule", &self.rule.name())
            .field("order", &self.order)
            .finish()
    }
}
