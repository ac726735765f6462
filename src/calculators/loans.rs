//! Mortgage, personal loan and auto loan calculators

use serde::{Deserialize, Serialize};

use crate::error::{ensure_count_in_range, ensure_in_range, ensure_non_negative, CalcError, Result};
use crate::loan::{
    compute_amortization_schedule, compute_loan_amortization, AmortizationSchedule, LoanParameters,
    LoanResult,
};

/// Amount financed together with the payment breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanBreakdown {
    pub amount_financed: f64,
    #[serde(flatten)]
    pub result: LoanResult,
}

impl LoanBreakdown {
    fn from_parameters(params: &LoanParameters) -> Self {
        Self {
            amount_financed: params.principal.max(0.0),
            result: compute_loan_amortization(params),
        }
    }
}

/// Home purchase financed over a term in years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageInputs {
    pub home_price: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_term_years: u32,
}

impl MortgageInputs {
    pub fn validate(&self) -> Result<()> {
        if !self.home_price.is_finite() || self.home_price < 1_000.0 {
            return Err(CalcError::invalid("home_price", "must be at least 1,000"));
        }
        ensure_non_negative("down_payment", self.down_payment)?;
        if self.down_payment > self.home_price {
            return Err(CalcError::invalid("down_payment", "cannot exceed the home price"));
        }
        ensure_in_range("interest_rate", self.interest_rate, 0.1, 20.0)?;
        ensure_count_in_range("loan_term_years", self.loan_term_years, 1, 50)
    }

    pub fn loan_parameters(&self) -> LoanParameters {
        LoanParameters::new(
            self.home_price - self.down_payment,
            self.interest_rate,
            self.loan_term_years.saturating_mul(12),
        )
    }

    pub fn calculate(&self) -> LoanBreakdown {
        LoanBreakdown::from_parameters(&self.loan_parameters())
    }

    pub fn schedule(&self) -> AmortizationSchedule {
        compute_amortization_schedule(&self.loan_parameters())
    }
}

impl Default for MortgageInputs {
    fn default() -> Self {
        Self {
            home_price: 300_000.0,
            down_payment: 60_000.0,
            interest_rate: 6.5,
            loan_term_years: 30,
        }
    }
}

/// Personal loan repaid over whole years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInputs {
    pub amount: f64,
    pub interest_rate: f64,
    pub years: u32,
}

impl LoanInputs {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("amount", self.amount)?;
        ensure_non_negative("interest_rate", self.interest_rate)?;
        ensure_count_in_range("years", self.years, 1, 10)
    }

    pub fn loan_parameters(&self) -> LoanParameters {
        LoanParameters::new(self.amount, self.interest_rate, self.years.saturating_mul(12))
    }

    pub fn calculate(&self) -> LoanBreakdown {
        LoanBreakdown::from_parameters(&self.loan_parameters())
    }

    pub fn schedule(&self) -> AmortizationSchedule {
        compute_amortization_schedule(&self.loan_parameters())
    }
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            amount: 10_000.0,
            interest_rate: 5.5,
            years: 3,
        }
    }
}

/// Vehicle purchase net of down payment and trade-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoLoanInputs {
    pub price: f64,
    pub down_payment: f64,
    pub trade_in: f64,
    pub interest_rate: f64,
    pub months: u32,
}

impl AutoLoanInputs {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("price", self.price)?;
        ensure_non_negative("down_payment", self.down_payment)?;
        ensure_non_negative("trade_in", self.trade_in)?;
        ensure_non_negative("interest_rate", self.interest_rate)?;
        ensure_count_in_range("months", self.months, 12, 96)
    }

    /// Price less down payment and trade-in, never below zero
    pub fn amount_financed(&self) -> f64 {
        (self.price - self.down_payment - self.trade_in).max(0.0)
    }

    pub fn loan_parameters(&self) -> LoanParameters {
        LoanParameters::new(self.amount_financed(), self.interest_rate, self.months)
    }

    pub fn calculate(&self) -> LoanBreakdown {
        LoanBreakdown::from_parameters(&self.loan_parameters())
    }

    pub fn schedule(&self) -> AmortizationSchedule {
        compute_amortization_schedule(&self.loan_parameters())
    }
}

impl Default for AutoLoanInputs {
    fn default() -> Self {
        Self {
            price: 35_000.0,
            down_payment: 5_000.0,
            trade_in: 2_000.0,
            interest_rate: 6.5,
            months: 60,
        }
    }
}
