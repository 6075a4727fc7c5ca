//! Highest Response Ratio Next engine.
//!
//! # Algorithm
//!
//! At each decision point:
//! 1. Among arrived, incomplete processes pick the one with the highest
//!    response ratio `(waiting + burst) / burst` at the current time.
//! 2. If none is eligible, jump the clock to the next arrival and count the
//!    gap as idle time.
//! 3. Run the selected process for its whole burst without interruption.
//!
//! # Complexity
//! O(n²): one selection scan per completed process.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use super::{next_arrival, EngineOutput};
use crate::dispatching::{rules, Dispatcher, SchedulingContext, TieBreaker};
use crate::error::SimulationError;
use crate::models::{ProcessState, Timeline};

/// Runs HRRN over `processes` until every process completes.
pub(crate) fn run(
    mut processes: Vec<ProcessState>,
    tie_breaker: TieBreaker,
) -> Result<EngineOutput, SimulationError> {
    let n = processes.len();
    let dispatcher = Dispatcher::new(rules::Hrrn, tie_breaker, &processes);
    let mut timeline = Timeline::new();
    let mut t: i64 = 0;
    let mut idle_time: i64 = 0;
    let mut completed: usize = 0;
    log::debug!(
        "hrrn: {} processes under {} ({})",
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
            log::trace!("hrrn: idle {t}..{next}");
            timeline.record_idle(t, next);
            idle_time += next - t;
            t = next;
            continue;
        };

        log::trace!(
            "hrrn: t={t} dispatch P{} (ratio={:.3}, ready={})",
            processes[idx].id,
            processes[idx].response_ratio(t),
            dispatcher.ready_queue(&processes, &context).len()
        );
        let process = &mut processes[idx];
        process.mark_dispatched(t);

        // Run to completion
        let start = t;
        t += process.burst_time;
        process.run_for(process.burst_time);
        process.complete_at(t);
        timeline.record_run(process.id, start, t);
        completed += 1;
    }

    Ok(EngineOutput {
        processes,
        timeline,
        elapsed_time: t,
        idle_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;

    fn states(rows: &[(u32, i64, i64)]) -> Vec<ProcessState> {
        rows.iter()
            .map(|&(id, arrival, burst)| ProcessState::from(ProcessDescriptor::new(id, arrival, burst)))
            .collect()
    }

    #[test]
    fn test_single_process() {
        let out = run(states(&[(1, 0, 5)]), TieBreaker::InputOrder).unwrap();
        assert_eq!(out.elapsed_time, 5);
        let p = &out.processes[0];
        assert_eq!(p.completion_time, 5);
        assert_eq!(p.turnaround_time, 5);
        assert_eq!(p.waiting_time, 0);
        assert_eq!(p.response_time, 0);
    }

    #[test]
    fn test_no_preemption() {
        let out = run(states(&[(1, 0, 8), (2, 1, 4)]), TieBreaker::InputOrder).unwrap();
        let p1 = &out.processes[0];
        let p2 = &out.processes[1];

        // P1 runs 0..8 regardless of P2 arriving at 1
        assert_eq!(p1.completion_time, 8);
        assert_eq!(p2.completion_time, 12);
        assert_eq!(p2.response_time, 7);
        assert_eq!(p2.waiting_time, 7);
        assert_eq!(out.timeline.slices_for(1).len(), 1);
    }

    #[test]
    fn test_ratio_selection() {
        // At t=3: P2 ratio (2+9)/9 ≈ 1.22, P3 ratio (1+2)/2 = 1.5 → P3 first
        let out = run(
            states(&[(1, 0, 3), (2, 1, 9), (3, 2, 2)]),
            TieBreaker::InputOrder,
        )
        .unwrap();
        assert_eq!(out.processes[0].completion_time, 3);
        assert_eq!(out.processes[2].completion_time, 5);
        assert_eq!(out.processes[1].completion_time, 14);
    }

    #[test]
    fn test_aging_beats_short_newcomer() {
        // At t=10: P2 ratio (9+6)/6 = 2.5, P3 ratio (1+1)/1 = 2.0 → P2 first
        let out = run(
            states(&[(1, 0, 10), (2, 1, 6), (3, 9, 1)]),
            TieBreaker::InputOrder,
        )
        .unwrap();
        assert_eq!(out.processes[1].completion_time, 16);
        assert_eq!(out.processes[2].completion_time, 17);
    }

    #[test]
    fn test_slightly_higher_ratio_wins() {
        // At t=1 P3 (ratio 100000/99999) edges out P2 (100001/100000)
        let out = run(
            states(&[(1, 0, 1), (2, 0, 100_000), (3, 0, 99_999)]),
            TieBreaker::InputOrder,
        )
        .unwrap();
        assert_eq!(out.processes[2].completion_time, 100_000);
        assert_eq!(out.processes[1].completion_time, 200_000);
    }

    #[test]
    fn test_idle_gap() {
        let out = run(states(&[(1, 0, 4), (2, 5, 3)]), TieBreaker::InputOrder).unwrap();
        assert_eq!(out.idle_time, 1);
        assert_eq!(out.elapsed_time, 8);
        assert_eq!(out.processes[1].response_time, 0);
    }

    #[test]
    fn test_equal_ratio_prefers_input_order() {
        let out = run(states(&[(5, 0, 2), (4, 0, 2)]), TieBreaker::InputOrder).unwrap();
        assert_eq!(out.processes[0].completion_time, 2);
        assert_eq!(out.processes[1].completion_time, 4);
    }
}
