//! Projection output: the period-indexed balance series and its summary

use serde::{Deserialize, Serialize};

/// Balance at the end of one outer period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Outer period index (0 = initial state)
    pub period: u32,
    pub balance: f64,
    pub cumulative_contribution: f64,
}

impl ProjectionPoint {
    pub fn new(period: u32, balance: f64, cumulative_contribution: f64) -> Self {
        Self {
            period,
            balance,
            cumulative_contribution,
        }
    }

    /// Balance in excess of contributions at this point
    pub fn growth(&self) -> f64 {
        self.balance - self.cumulative_contribution
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_balance: f64,
    pub total_contributed: f64,

    /// `final_balance - total_contributed`
    pub total_growth: f64,

    /// One point per outer period, `periods + 1` in total
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    /// Build a result from a finished series; totals come from the last point
    pub fn from_points(points: Vec<ProjectionPoint>) -> Self {
        let (final_balance, total_contributed) = points
            .last()
            .map(|p| (p.balance, p.cumulative_contribution))
            .unwrap_or((0.0, 0.0));

        Self {
            final_balance,
            total_contributed,
            total_growth: final_balance - total_contributed,
            points,
        }
    }

    /// Zero-valued result that still carries `periods + 1` points
    pub fn zero(periods: u32) -> Self {
        let points = (0..=periods)
            .map(|period| ProjectionPoint::new(period, 0.0, 0.0))
            .collect();
        Self::from_points(points)
    }

    /// Number of outer periods projected
    pub fn periods(&self) -> u32 {
        self.points.len().saturating_sub(1) as u32
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let growth_share = if self.final_balance > 0.0 {
            self.total_growth / self.final_balance
        } else {
            0.0
        };

        ProjectionSummary {
            periods: self.periods(),
            final_balance: self.final_balance,
            total_contributed: self.total_contributed,
            total_growth: self.total_growth,
            growth_share,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub periods: u32,
    pub final_balance: f64,
    pub total_contributed: f64,
    pub total_growth: f64,
    /// Fraction of the final balance that came from growth rather than contributions
    pub growth_share: f64,
}
