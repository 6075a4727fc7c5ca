//! Built-in dispatching rules.
//!
//! - **SRTF**: least remaining time first (preemptive engines)
//! - **HRRN**: highest response ratio first (non-preemptive engines)
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use std::cmp::Ordering;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessState;

/// Shortest Remaining Time First.
///
/// Prioritizes the process closest to completion. Re-evaluated every
/// time unit, so a newly arrived short process preempts a longer one.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl DispatchingRule for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &ProcessState, _context: &SchedulingContext) -> RuleScore {
        process.remaining_time as f64
    }

    fn compare(&self, a: &ProcessState, b: &ProcessState, _context: &SchedulingContext) -> Ordering {
        a.remaining_time.cmp(&b.remaining_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Highest Response Ratio Next.
///
/// Ratio = (waiting + burst) / burst. Short processes start with an
/// advantage, but waiting raises every ratio, so long processes cannot
/// starve.
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl DispatchingRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> RuleScore {
        -process.response_ratio(context.current_time) // Higher ratio = higher priority → negate
    }

    /// Compares `(wa + ba) / ba` against `(wb + bb) / bb` as
    /// `(wa + ba) * bb` against `(wb + bb) * ba` in `i128`.
    fn compare(&self, a: &ProcessState, b: &ProcessState, context: &SchedulingContext) -> Ordering {
        let t = i128::from(context.current_time);
        let numerator = |p: &ProcessState| t - i128::from(p.arrival_time) + i128::from(p.burst_time);
        let lhs = numerator(a) * i128::from(b.burst_time);
        let rhs = numerator(b) * i128::from(a.burst_time);
        // Larger ratio first
        rhs.cmp(&lhs)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;

    fn make_process(id: u32, arrival: i64, burst: i64) -> ProcessState {
        ProcessState::from(ProcessDescriptor::new(id, arrival, burst))
    }

    #[test]
    fn test_srtf() {
        let ctx = SchedulingContext::at_time(0);
        let short = make_process(1, 0, 2);
        let long = make_process(2, 0, 9);
        assert!(Srtf.evaluate(&short, &ctx) < Srtf.evaluate(&long, &ctx));
    }

    #[test]
    fn test_srtf_uses_remaining_time() {
        let ctx = SchedulingContext::at_time(5);
        let mut nearly_done = make_process(1, 0, 10);
        nearly_done.run_for(9);
        let fresh = make_process(2, 0, 3);
        assert!(Srtf.evaluate(&nearly_done, &ctx) < Srtf.evaluate(&fresh, &ctx));
    }

    #[test]
    fn test_hrrn_prefers_short_at_equal_wait() {
        let ctx = SchedulingContext::at_time(4);
        let short = make_process(1, 0, 2); // (4 + 2) / 2 = 3.0
        let long = make_process(2, 0, 8); // (4 + 8) / 8 = 1.5
        assert!(Hrrn.evaluate(&short, &ctx) < Hrrn.evaluate(&long, &ctx));
    }

    #[test]
    fn test_hrrn_aging() {
        let ctx = SchedulingContext::at_time(20);
        let old_long = make_process(1, 0, 10); // (20 + 10) / 10 = 3.0
        let new_short = make_process(2, 19, 2); // (1 + 2) / 2 = 1.5
        assert!(Hrrn.evaluate(&old_long, &ctx) < Hrrn.evaluate(&new_short, &ctx));
    }

    #[test]
    fn test_hrrn_score_value() {
        let ctx = SchedulingContext::at_time(6);
        let p = make_process(1, 2, 4); // (4 + 4) / 4 = 2.0
        assert!((Hrrn.evaluate(&p, &ctx) + 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_hrrn_compare_separates_close_ratios() {
        // At t=1: 100000/99999 is above 100001/100000 by about 1e-10
        let ctx = SchedulingContext::at_time(1);
        let long = make_process(2, 0, 100_000);
        let shorter = make_process(3, 0, 99_999);
        assert_eq!(Hrrn.compare(&shorter, &long, &ctx), Ordering::Less);
        assert_eq!(Hrrn.compare(&long, &shorter, &ctx), Ordering::Greater);
    }

    #[test]
    fn test_hrrn_compare_equal_ratios() {
        // (4 + 8) / 8 == (2 + 4) / 4
        let ctx = SchedulingContext::at_time(4);
        let a = make_process(1, 0, 8);
        let b = make_process(2, 2, 4);
        assert_eq!(Hrrn.compare(&a, &b, &ctx), Ordering::Equal);
    }

    #[test]
    fn test_srtf_compare_large_remaining() {
        // Both round to the same f64
        let ctx = SchedulingContext::at_time(0);
        let a = make_process(1, 0, (1 << 53) + 1);
        let b = make_process(2, 0, 1 << 53);
        assert_eq!(Srtf.compare(&b, &a, &ctx), Ordering::Less);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Srtf.name(), "SRTF");
        assert_eq!(Hrrn.name(), "HRRN");
        assert_eq!(Hrrn.description(), "Highest Response Ratio Next");
    }
}
