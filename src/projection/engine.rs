//! Compounding projection for savings, investment and retirement balances

use log::debug;
use serde::{Deserialize, Serialize};

use super::series::{ProjectionPoint, ProjectionResult};
use super::state::ProjectionState;
use crate::error::{ensure_non_negative, ensure_positive_count, Result};

/// Inputs for a contribute-then-grow projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Balance at period 0
    pub initial_balance: f64,

    /// Amount contributed per outer period, spread evenly over its compounding sub-steps
    pub periodic_contribution: f64,

    /// Nominal annual growth rate in percent
    pub annual_rate_percent: f64,

    /// Number of outer periods (years) to project
    pub periods: u32,

    /// Compounding sub-steps per outer period (12 = monthly, 1 = annual)
    pub compoundings_per_year: u32,
}

impl ProjectionParameters {
    pub fn new(
        initial_balance: f64,
        periodic_contribution: f64,
        annual_rate_percent: f64,
        periods: u32,
        compoundings_per_year: u32,
    ) -> Self {
        Self {
            initial_balance,
            periodic_contribution,
            annual_rate_percent,
            periods,
            compoundings_per_year,
        }
    }

    /// Same inputs with a different growth rate
    pub fn with_rate(mut self, annual_rate_percent: f64) -> Self {
        self.annual_rate_percent = annual_rate_percent;
        self
    }

    /// Check inputs before they reach the engine
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("initial_balance", self.initial_balance)?;
        ensure_non_negative("periodic_contribution", self.periodic_contribution)?;
        ensure_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        ensure_positive_count("compoundings_per_year", self.compoundings_per_year)
    }
}

/// Project a balance forward under periodic contributions and compounding
///
/// Each outer period runs `compoundings_per_year` sub-steps of
/// `balance += C / F; balance *= 1 + R / 100 / F`. The returned series holds
/// `periods + 1` points starting with the initial state. Values are unrounded.
/// Inputs that fail [`ProjectionParameters::validate`] produce an all-zero
/// series of the same length.
pub fn compute_compound_projection(params: &ProjectionParameters) -> ProjectionResult {
    if params.validate().is_err() {
        debug!("degenerate projection inputs {:?}, returning zero series", params);
        return ProjectionResult::zero(params.periods);
    }

    let mut state = ProjectionState::from_parameters(params);
    let mut points = Vec::with_capacity(params.periods as usize + 1);
    points.push(ProjectionPoint::new(0, state.balance, state.cumulative_contribution));

    for _ in 0..params.periods {
        state.advance_period();
        points.push(ProjectionPoint::new(
            state.period,
            state.balance,
            state.cumulative_contribution,
        ));
    }

    ProjectionResult::from_points(points)
}
