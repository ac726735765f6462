//! Month-by-month amortization schedule

use serde::{Deserialize, Serialize};

use super::amortization::{compute_loan_amortization, LoanParameters, LoanResult};

/// One monthly payment split into interest and principal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance still owed after this payment
    pub remaining_balance: f64,
}

/// Loan totals together with the full payment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub summary: LoanResult,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Sum of the interest portions across all payments
    pub fn total_interest_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Sum of the principal portions across all payments
    pub fn total_principal_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.principal).sum()
    }

    /// Principal and interest paid within each 12-month year, for charting
    pub fn yearly_totals(&self) -> Vec<(u32, f64, f64)> {
        let mut years: Vec<(u32, f64, f64)> = Vec::new();
        for row in &self.rows {
            let year = (row.month - 1) / 12 + 1;
            match years.last_mut() {
                Some(entry) if entry.0 == year => {
                    entry.1 += row.principal;
                    entry.2 += row.interest;
                }
                _ => years.push((year, row.principal, row.interest)),
            }
        }
        years
    }
}

/// Build the payment-by-payment schedule for a loan
///
/// Degenerate loans produce the zero summary and no rows. The last row clears
/// whatever floating residue is left so the loan ends at exactly zero.
pub fn compute_amortization_schedule(params: &LoanParameters) -> AmortizationSchedule {
    let summary = compute_loan_amortization(params);
    if !params.is_amortizable() {
        return AmortizationSchedule {
            summary,
            rows: Vec::new(),
        };
    }

    let rate = params.monthly_rate();
    let mut balance = params.principal;
    let mut rows = Vec::with_capacity(params.term_months as usize);

    for month in 1..=params.term_months {
        let interest = balance * rate;
        let principal = if month == params.term_months {
            balance
        } else {
            summary.monthly_payment - interest
        };
        balance = if month == params.term_months {
            0.0
        } else {
            balance - principal
        };

        rows.push(AmortizationRow {
            month,
            payment: summary.monthly_payment,
            interest,
            principal,
            remaining_balance: balance,
        });
    }

    AmortizationSchedule { summary, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_schedule_length_and_final_balance() {
        let schedule = compute_amortization_schedule(&LoanParameters::new(240_000.0, 6.5, 360));

        assert_eq!(schedule.rows.len(), 360);
        assert_eq!(schedule.rows.last().unwrap().remaining_balance, 0.0);
        assert_eq!(schedule.rows[0].month, 1);
    }

    #[test]
    fn test_schedule_reconciles_with_summary() {
        let params = LoanParameters::new(28_000.0, 6.5, 60);
        let schedule = compute_amortization_schedule(&params);

        assert_abs_diff_eq!(schedule.total_principal_paid(), 28_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            schedule.total_interest_paid(),
            schedule.summary.total_interest,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_first_month_interest() {
        // 12% annual on $12,000 accrues $120 in month one
        let schedule = compute_amortization_schedule(&LoanParameters::new(12_000.0, 12.0, 24));
        let first = schedule.rows[0];

        assert_abs_diff_eq!(first.interest, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal, first.payment - 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_share_declines() {
        let schedule = compute_amortization_schedule(&LoanParameters::new(100_000.0, 5.0, 120));
        let interest: Vec<f64> = schedule.rows.iter().map(|r| r.interest).collect();
        assert!(interest.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_zero_rate_schedule_has_no_interest() {
        let schedule = compute_amortization_schedule(&LoanParameters::new(10_000.0, 0.0, 36));
        assert!(schedule.rows.iter().all(|r| r.interest == 0.0));
        assert_abs_diff_eq!(schedule.total_principal_paid(), 10_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_loan_has_no_rows() {
        let schedule = compute_amortization_schedule(&LoanParameters::new(0.0, 6.5, 60));
        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.summary, LoanResult::zero());
    }

    #[test]
    fn test_yearly_totals() {
        let schedule = compute_amortization_schedule(&LoanParameters::new(10_000.0, 5.5, 36));
        let years = schedule.yearly_totals();

        assert_eq!(years.len(), 3);
        assert_eq!(years[0].0, 1);
        let principal: f64 = years.iter().map(|y| y.1).sum();
        assert_abs_diff_eq!(principal, 10_000.0, epsilon = 1e-6);
    }
}
