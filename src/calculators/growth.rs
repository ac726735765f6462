//! Compound interest, investment and retirement calculators
//!
//! All three run the shared projection engine with years as the outer period
//! and monthly contributions annualised (`monthly × 12`). Contributions are
//! made at the start of every compounding sub-step, before growth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_count_in_range, ensure_in_range, ensure_non_negative, CalcError, Result};
use crate::projection::{
    compute_compound_projection, ProjectionParameters, ProjectionResult, PurchasingPower,
};

/// How often growth is credited within a year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Annually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Daily => "daily",
        };
        f.write_str(name)
    }
}

impl FromStr for CompoundingFrequency {
    type Err = CalcError;

    /// Accepts names ("monthly") or the count per year ("12")
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annually" | "annual" | "yearly" | "1" => Ok(CompoundingFrequency::Annually),
            "quarterly" | "4" => Ok(CompoundingFrequency::Quarterly),
            "monthly" | "12" => Ok(CompoundingFrequency::Monthly),
            "daily" | "365" => Ok(CompoundingFrequency::Daily),
            other => Err(CalcError::invalid(
                "compounding",
                format!("unknown compounding frequency `{}`", other),
            )),
        }
    }
}

/// Lump sum plus monthly savings compounded at a chosen frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundInterestInputs {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub interest_rate: f64,
    pub compounding: CompoundingFrequency,
}

impl CompoundInterestInputs {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("principal", self.principal)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)?;
        ensure_non_negative("interest_rate", self.interest_rate)?;
        ensure_count_in_range("years", self.years, 1, 50)
    }

    pub fn projection_parameters(&self) -> ProjectionParameters {
        ProjectionParameters::new(
            self.principal,
            self.monthly_contribution * 12.0,
            self.interest_rate,
            self.years,
            self.compounding.periods_per_year(),
        )
    }

    pub fn calculate(&self) -> ProjectionResult {
        compute_compound_projection(&self.projection_parameters())
    }
}

impl Default for CompoundInterestInputs {
    fn default() -> Self {
        Self {
            principal: 5_000.0,
            monthly_contribution: 200.0,
            years: 10,
            interest_rate: 5.0,
            compounding: CompoundingFrequency::Monthly,
        }
    }
}

/// Initial deposit plus monthly contributions, compounded monthly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentInputs {
    pub initial: f64,
    pub monthly: f64,
    pub rate: f64,
    pub years: u32,
}

impl InvestmentInputs {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("initial", self.initial)?;
        ensure_non_negative("monthly", self.monthly)?;
        ensure_non_negative("rate", self.rate)?;
        ensure_count_in_range("years", self.years, 1, 40)
    }

    pub fn projection_parameters(&self) -> ProjectionParameters {
        ProjectionParameters::new(
            self.initial,
            self.monthly * 12.0,
            self.rate,
            self.years,
            CompoundingFrequency::Monthly.periods_per_year(),
        )
    }

    pub fn calculate(&self) -> ProjectionResult {
        compute_compound_projection(&self.projection_parameters())
    }
}

impl Default for InvestmentInputs {
    fn default() -> Self {
        Self {
            initial: 5_000.0,
            monthly: 200.0,
            rate: 7.0,
            years: 20,
        }
    }
}

/// Oldest retirement age accepted by [`RetirementInputs::validate`]
pub const MAX_AGE: u32 = 120;

/// Savings grown yearly until retirement, reported in nominal and today's money
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub return_rate: f64,
    pub inflation_rate: f64,
}

impl RetirementInputs {
    pub fn validate(&self) -> Result<()> {
        ensure_count_in_range("retirement_age", self.retirement_age, 0, MAX_AGE)?;
        if self.retirement_age < self.current_age {
            return Err(CalcError::invalid(
                "retirement_age",
                format!(
                    "must not be before current age {} (got {})",
                    self.current_age, self.retirement_age
                ),
            ));
        }
        ensure_non_negative("current_savings", self.current_savings)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)?;
        ensure_in_range("return_rate", self.return_rate, 1.0, 12.0)?;
        ensure_non_negative("inflation_rate", self.inflation_rate)
    }

    /// Whole years until retirement, zero if already retired
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    pub fn projection_parameters(&self) -> ProjectionParameters {
        ProjectionParameters::new(
            self.current_savings,
            self.monthly_contribution * 12.0,
            self.return_rate,
            self.years_to_retirement(),
            CompoundingFrequency::Annually.periods_per_year(),
        )
    }

    pub fn calculate(&self) -> RetirementResult {
        let projection = compute_compound_projection(&self.projection_parameters());
        let inflation = PurchasingPower::new(self.inflation_rate);

        let points = projection
            .points
            .iter()
            .map(|p| RetirementPoint {
                age: self.current_age + p.period,
                balance: p.balance,
                real_balance: inflation.real_value(p.balance, p.period),
                cumulative_contribution: p.cumulative_contribution,
            })
            .collect();

        RetirementResult {
            real_final_balance: inflation.real_value(projection.final_balance, projection.periods()),
            projection,
            points,
        }
    }
}

impl Default for RetirementInputs {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50_000.0,
            monthly_contribution: 1_000.0,
            return_rate: 7.0,
            inflation_rate: 3.0,
        }
    }
}

/// Balance at one attained age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementPoint {
    pub age: u32,
    pub balance: f64,
    /// Balance in today's money
    pub real_balance: f64,
    pub cumulative_contribution: f64,
}

/// Nominal projection with its inflation-adjusted view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub projection: ProjectionResult,
    pub real_final_balance: f64,
    pub points: Vec<RetirementPoint>,
}
