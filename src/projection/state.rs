//! Running balance state for a compounding projection

use super::engine::ProjectionParameters;

/// Balance and contribution totals at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Completed outer periods (0 before the first period)
    pub period: u32,

    /// Current balance, unrounded
    pub balance: f64,

    /// Initial balance plus every contribution made so far
    pub cumulative_contribution: f64,

    initial_balance: f64,
    periodic_contribution: f64,

    /// Contribution added at each compounding sub-step
    contribution_per_step: f64,

    /// Growth multiplier applied at each compounding sub-step
    growth_per_step: f64,

    /// Sub-steps per outer period
    steps_per_period: u32,
}

impl ProjectionState {
    /// Initialize state from projection inputs at period 0
    pub fn from_parameters(params: &ProjectionParameters) -> Self {
        let steps = params.compoundings_per_year;
        Self {
            period: 0,
            balance: params.initial_balance,
            cumulative_contribution: params.initial_balance,
            initial_balance: params.initial_balance,
            periodic_contribution: params.periodic_contribution,
            contribution_per_step: params.periodic_contribution / steps as f64,
            growth_per_step: 1.0 + params.annual_rate_percent / 100.0 / steps as f64,
            steps_per_period: steps,
        }
    }

    /// Run one outer period: contribute then grow, once per compounding sub-step
    pub fn advance_period(&mut self) {
        for _ in 0..self.steps_per_period {
            self.balance += self.contribution_per_step;
            self.balance *= self.growth_per_step;
        }

        self.period += 1;
        // Exactly B0 + C·k, not a running sum
        self.cumulative_contribution =
            self.initial_balance + self.periodic_contribution * self.period as f64;
    }

    /// Balance in excess of what was paid in
    pub fn growth(&self) -> f64 {
        self.balance - self.cumulative_contribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_contribution_precedes_growth() {
        // $100 contributed then grown 10% in a single annual step
        let params = ProjectionParameters::new(0.0, 100.0, 10.0, 1, 1);
        let mut state = ProjectionState::from_parameters(&params);
        state.advance_period();

        assert_abs_diff_eq!(state.balance, 110.0, epsilon = 1e-9);
        assert_abs_diff_eq!(state.cumulative_contribution, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.growth(), 10.0, epsilon = 1e-9);
        assert_eq!(state.period, 1);
    }

    #[test]
    fn test_contribution_split_across_sub_steps() {
        // 1200/year at 0% in monthly steps: each step adds 100
        let params = ProjectionParameters::new(50.0, 1_200.0, 0.0, 2, 12);
        let mut state = ProjectionState::from_parameters(&params);
        state.advance_period();
        assert_abs_diff_eq!(state.balance, 1_250.0, epsilon = 1e-9);
        state.advance_period();
        assert_abs_diff_eq!(state.balance, 2_450.0, epsilon = 1e-9);
        assert_eq!(state.cumulative_contribution, 2_450.0);
    }
}
