//! Calculator variants built on the two shared engines
//!
//! Each calculator maps its form inputs onto either
//! [`compute_loan_amortization`](crate::loan::compute_loan_amortization) or
//! [`compute_compound_projection`](crate::projection::compute_compound_projection):
//!
//! | Calculator        | Engine     | Mapping                                        |
//! |-------------------|------------|------------------------------------------------|
//! | Mortgage          | loan       | principal = price − down payment, years × 12   |
//! | Loan              | loan       | principal = amount, years × 12                 |
//! | Auto loan         | loan       | principal = max(0, price − down − trade-in)    |
//! | Compound interest | projection | monthly × 12 per year, chosen frequency        |
//! | Investment        | projection | monthly × 12 per year, monthly compounding     |
//! | Retirement        | projection | monthly × 12 per year, annual compounding      |
//!
//! `validate()` enforces the same ranges as the original input forms, e.g. a
//! mortgage rate of 0.1–20% over 1–50 years or an auto loan of 12–96 months.

mod loans;
mod growth;

pub use loans::{AutoLoanInputs, LoanBreakdown, LoanInputs, MortgageInputs};
pub use growth::{
    CompoundInterestInputs, CompoundingFrequency, InvestmentInputs, RetirementInputs,
    RetirementPoint, RetirementResult, MAX_AGE,
};
