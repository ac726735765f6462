//! Fixed-payment amortization for mortgages, personal loans and auto loans

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_count_in_range, ensure_non_negative, Result};

/// Longest term accepted by [`LoanParameters::validate`] (100 years)
pub const MAX_TERM_MONTHS: u32 = 1_200;

/// Inputs for a fully amortizing fixed-payment loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount financed (currency units)
    pub principal: f64,

    /// Nominal annual interest rate in percent (6.5 means 6.5%)
    pub annual_rate_percent: f64,

    /// Number of monthly payments
    pub term_months: u32,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Periodic (monthly) interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Check inputs before they reach the engine
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("principal", self.principal)?;
        ensure_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        ensure_count_in_range("term_months", self.term_months, 1, MAX_TERM_MONTHS)
    }

    /// True when the inputs describe a loan with something to repay
    pub(crate) fn is_amortizable(&self) -> bool {
        self.principal.is_finite()
            && self.principal > 0.0
            && self.annual_rate_percent.is_finite()
            && self.annual_rate_percent >= 0.0
            && self.term_months > 0
    }
}

/// Payment and totals for an amortized loan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanResult {
    /// Degenerate result for a loan with nothing to repay
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Level monthly payment that retires `principal` over `term_months`
///
/// Straight-line `P / N` when the rate is zero, otherwise the annuity formula
/// `P·r·(1+r)^N / ((1+r)^N − 1)`.
fn level_payment(params: &LoanParameters) -> f64 {
    let principal = params.principal;
    let months = params.term_months;
    let rate = params.monthly_rate();

    if rate == 0.0 {
        return principal / months as f64;
    }

    let growth = (1.0 + rate).powf(months as f64);
    if growth == 1.0 {
        // rate below f64 resolution
        return principal / months as f64;
    }
    if growth.is_infinite() {
        // interest-only limit of the annuity formula
        return principal * rate;
    }
    principal * rate * growth / (growth - 1.0)
}

/// Compute the fixed monthly payment and totals for a loan
///
/// Loans with nothing to repay (principal ≤ 0) and inputs that slipped past
/// validation (non-finite values, negative rate, zero term) produce the zero
/// result rather than an error.
pub fn compute_loan_amortization(params: &LoanParameters) -> LoanResult {
    if !params.is_amortizable() {
        debug!(
            "degenerate loan inputs (principal={}, rate={}%, term={}), returning zero result",
            params.principal, params.annual_rate_percent, params.term_months
        );
        return LoanResult::zero();
    }

    let monthly_payment = level_payment(params);
    let total_payment = monthly_payment * params.term_months as f64;
    let total_interest = total_payment - params.principal;

    LoanResult {
        monthly_payment,
        total_payment,
        total_interest,
    }
}
