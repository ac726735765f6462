//! Scenario runner for batch projections
//!
//! Holds one set of base inputs and evaluates many variations of it in
//! parallel. The engines are pure, so parallel results are identical to running
//! the same inputs one at a time, and output order always follows input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::loan::{compute_loan_amortization, LoanParameters, LoanResult};
use crate::projection::{compute_compound_projection, ProjectionParameters, ProjectionResult};

/// Projection outcome for one growth rate in a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateScenario {
    pub annual_rate_percent: f64,
    pub result: ProjectionResult,
}

/// Batch runner over a base projection
///
/// # Example
/// ```
/// use finance_calc::projection::ProjectionParameters;
/// use finance_calc::ScenarioRunner;
///
/// let runner = ScenarioRunner::new(ProjectionParameters::new(5_000.0, 2_400.0, 5.0, 10, 12));
/// let sweep = runner.sweep_rates(&[3.0, 5.0, 7.0]);
/// assert!(sweep[2].result.final_balance > sweep[0].result.final_balance);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: ProjectionParameters,
}

impl ScenarioRunner {
    pub fn new(base: ProjectionParameters) -> Self {
        Self { base }
    }

    /// Project the base inputs once
    pub fn run(&self) -> ProjectionResult {
        compute_compound_projection(&self.base)
    }

    /// Project the base inputs under each growth rate
    pub fn sweep_rates(&self, rates: &[f64]) -> Vec<RateScenario> {
        rates
            .par_iter()
            .map(|&rate| RateScenario {
                annual_rate_percent: rate,
                result: compute_compound_projection(&self.base.with_rate(rate)),
            })
            .collect()
    }

    /// Evenly spaced rates from `start` to `end` inclusive
    pub fn rate_grid(start: f64, end: f64, step: f64) -> Vec<f64> {
        if step <= 0.0 || !step.is_finite() || end < start {
            return vec![start];
        }
        let count = ((end - start) / step + 1e-9).floor() as usize;
        (0..=count).map(|i| start + step * i as f64).collect()
    }

    /// Get reference to the base inputs
    pub fn base(&self) -> &ProjectionParameters {
        &self.base
    }
}

/// Run many independent projections in parallel
pub fn run_projection_batch(params: &[ProjectionParameters]) -> Vec<ProjectionResult> {
    params.par_iter().map(compute_compound_projection).collect()
}

/// Run many independent loan calculations in parallel
pub fn run_loan_batch(params: &[LoanParameters]) -> Vec<LoanResult> {
    params.par_iter().map(compute_loan_amortization).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProjectionParameters {
        ProjectionParameters::new(5_000.0, 2_400.0, 5.0, 10, 12)
    }

    #[test]
    fn test_sweep_orders_by_input() {
        let runner = ScenarioRunner::new(base());
        let sweep = runner.sweep_rates(&[7.0, 3.0, 5.0]);

        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep[0].annual_rate_percent, 7.0);
        assert_eq!(sweep[1].annual_rate_percent, 3.0);
        // Higher rate should result in higher final balance
        assert!(sweep[0].result.final_balance > sweep[2].result.final_balance);
        assert!(sweep[2].result.final_balance > sweep[1].result.final_balance);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let params: Vec<_> = (0..64)
            .map(|i| ProjectionParameters::new(1_000.0 * i as f64, 1_200.0, 0.25 * i as f64, 30, 12))
            .collect();

        let parallel = run_projection_batch(&params);
        let sequential: Vec<_> = params.iter().map(compute_compound_projection).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_loan_batch() {
        let params = vec![
            LoanParameters::new(240_000.0, 6.5, 360),
            LoanParameters::new(0.0, 6.5, 360),
            LoanParameters::new(10_000.0, 0.0, 36),
        ];
        let results = run_loan_batch(&params);

        assert_eq!(results.len(), 3);
        assert_eq!(results[1], LoanResult::zero());
        assert_eq!(results[2].monthly_payment, 10_000.0 / 36.0);
    }

    #[test]
    fn test_rate_grid() {
        assert_eq!(ScenarioRunner::rate_grid(3.0, 5.0, 0.5), vec![3.0, 3.5, 4.0, 4.5, 5.0]);
        assert_eq!(ScenarioRunner::rate_grid(4.0, 4.0, 1.0), vec![4.0]);
        assert_eq!(ScenarioRunner::rate_grid(4.0, 2.0, 1.0), vec![4.0]);
        assert_eq!(ScenarioRunner::rate_grid(1.0, 2.0, 0.0), vec![1.0]);
    }

    #[test]
    fn test_run_matches_engine() {
        let runner = ScenarioRunner::new(base());
        assert_eq!(runner.run(), compute_compound_projection(runner.base()));
    }
}
