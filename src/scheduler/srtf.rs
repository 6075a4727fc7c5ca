//! Shortest Remaining Time First engine.
//!
//! # Algorithm
//!
//! The virtual clock advances one unit per step. At each step:
//! 1. Select the arrived, incomplete process with the least remaining time.
//! 2. If none is eligible, jump the clock to the next arrival and count the
//!    gap as idle time.
//! 3. On first dispatch, record the response time.
//! 4. Run the selected process for one unit; complete it when its
//!    remaining time reaches zero.
//!
//! Because selection is repeated every unit, a newly arrived process with
//! less remaining work preempts the running one.
//!
//! # Complexity
//! O(B * n) where B = total burst time, n = process count.

use super::{next_arrival, EngineOutput};
use crate::dispatching::{rules, Dispatcher, SchedulingContext, TieBreaker};
use crate::error::SimulationError;
use crate::models::{ProcessState, Timeline};

/// Runs SRTF over `processes` until every process completes.
pub(crate) fn run(
    mut processes: Vec<ProcessState>,
    tie_breaker: TieBreaker,
) -> Result<EngineOutput, SimulationError> {
    let n = processes.len();
    let dispatcher = Dispatcher::new(rules::Srtf, tie_breaker, &processes);
    let mut timeline = Timeline::new();
    let mut t: i64 = 0;
    let mut idle_time: i64 = 0;
    let mut completed: usize = 0;
    log::debug!(
        "srtf: {} processes under {} ({})",
        n,
        dispatcher.rule_name(),
        dispatcher.rule_description()
    );

    while completed < n {
        let context = SchedulingContext::at_time(t);

        let Some(idx) = dispatcher.select(&processes, &context) else {
            let next = next_arrival(&processes, t).ok_or(
                SimulationError::InternalInconsistency {
                    time: t,
                    pending: n - completed,
                },
            )?;
            log::trace!("srtf: idle {t}..{next}");
            timeline.record_idle(t, next);
            idle_time += next - t;
            t = next;
            continue;
        };

        let process = &mut processes[idx];
        if !process.started {
            log::trace!("srtf: t={t} first dispatch of P{}", process.id);
        }
        process.mark_dispatched(t);

        // One unit of execution
        process.run_for(1);
        timeline.record_run(process.id, t, t + 1);
        t += 1;

        if process.is_complete() {
            process.complete_at(t);
            completed += 1;
            log::trace!(
                "srtf: t={t} P{} completed (turnaround={}, waiting={})",
                process.id,
                process.turnaround_time,
                process.waiting_time
            );
        }
    }

    Ok(EngineOutput {
        processes,
        timeline,
        elapsed_time: t,
        idle_time,
    })
}
