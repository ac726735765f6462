//! Amortized loan payments and schedules

mod amortization;
mod schedule;

pub use amortization::{compute_loan_amortization, LoanParameters, LoanResult, MAX_TERM_MONTHS};
pub use schedule::{compute_amortization_schedule, AmortizationRow, AmortizationSchedule};
