//! Finance Calc - Loan amortization and compounding projection engine
//!
//! This library provides:
//! - Fixed-payment loan amortization with month-by-month schedules
//! - Contribute-then-grow projections with intra-year compounding
//! - Mortgage, loan, auto loan, compound interest, investment and retirement calculators
//! - JSON calculation requests, presentation rounding and CSV export
//! - Parallel rate sweeps and batch evaluation

pub mod error;
pub mod loan;
pub mod projection;
pub mod calculators;
pub mod request;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use loan::{compute_loan_amortization, LoanParameters, LoanResult};
pub use projection::{compute_compound_projection, ProjectionParameters, ProjectionPoint, ProjectionResult};
pub use request::{CalculationOutput, CalculationRequest};
pub use scenario::ScenarioRunner;
