//! JSON calculation requests
//!
//! A request names its calculator and supplies any subset of that calculator's
//! inputs; missing fields fall back to the calculator's default form values:
//!
//! ```json
//! { "calculator": "mortgage", "home_price": 450000, "down_payment": 90000 }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculators::{
    AutoLoanInputs, CompoundInterestInputs, InvestmentInputs, LoanBreakdown, LoanInputs,
    MortgageInputs, RetirementInputs, RetirementResult,
};
use crate::error::Result;
use crate::loan::AmortizationSchedule;
use crate::projection::{ProjectionResult, ProjectionSummary};

/// One calculation, tagged by calculator name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationRequest {
    Mortgage(MortgageInputs),
    Loan(LoanInputs),
    AutoLoan(AutoLoanInputs),
    CompoundInterest(CompoundInterestInputs),
    Investment(InvestmentInputs),
    Retirement(RetirementInputs),
}

impl CalculationRequest {
    /// Parse a request from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a request from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        debug!("loaded request from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    /// Calculator name as it appears in the `calculator` tag
    pub fn name(&self) -> &'static str {
        match self {
            CalculationRequest::Mortgage(_) => "mortgage",
            CalculationRequest::Loan(_) => "loan",
            CalculationRequest::AutoLoan(_) => "auto_loan",
            CalculationRequest::CompoundInterest(_) => "compound_interest",
            CalculationRequest::Investment(_) => "investment",
            CalculationRequest::Retirement(_) => "retirement",
        }
    }

    /// Reject inputs the calculator's form would not accept
    pub fn validate(&self) -> Result<()> {
        match self {
            CalculationRequest::Mortgage(inputs) => inputs.validate(),
            CalculationRequest::Loan(inputs) => inputs.validate(),
            CalculationRequest::AutoLoan(inputs) => inputs.validate(),
            CalculationRequest::CompoundInterest(inputs) => inputs.validate(),
            CalculationRequest::Investment(inputs) => inputs.validate(),
            CalculationRequest::Retirement(inputs) => inputs.validate(),
        }
    }

    /// Validate, then run the calculator
    pub fn evaluate(&self) -> Result<CalculationOutput> {
        self.validate()?;

        let output = match self {
            CalculationRequest::Mortgage(inputs) => CalculationOutput::loan(inputs.calculate(), inputs.schedule()),
            CalculationRequest::Loan(inputs) => CalculationOutput::loan(inputs.calculate(), inputs.schedule()),
            CalculationRequest::AutoLoan(inputs) => CalculationOutput::loan(inputs.calculate(), inputs.schedule()),
            CalculationRequest::CompoundInterest(inputs) => CalculationOutput::projection(inputs.calculate()),
            CalculationRequest::Investment(inputs) => CalculationOutput::projection(inputs.calculate()),
            CalculationRequest::Retirement(inputs) => CalculationOutput::Retirement {
                result: inputs.calculate(),
            },
        };

        Ok(output)
    }
}

/// Result of evaluating a [`CalculationRequest`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationOutput {
    Loan {
        breakdown: LoanBreakdown,
        schedule: AmortizationSchedule,
    },
    Projection {
        summary: ProjectionSummary,
        result: ProjectionResult,
    },
    Retirement {
        result: RetirementResult,
    },
}

impl CalculationOutput {
    fn loan(breakdown: LoanBreakdown, schedule: AmortizationSchedule) -> Self {
        CalculationOutput::Loan { breakdown, schedule }
    }

    fn projection(result: ProjectionResult) -> Self {
        CalculationOutput::Projection {
            summary: result.summary(),
            result,
        }
    }

    /// Pretty-printed JSON rendering
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::CompoundingFrequency;
    use crate::error::CalcError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_missing_fields_use_defaults() {
        let request = CalculationRequest::from_json_str(r#"{"calculator": "mortgage"}"#).unwrap();
        assert_eq!(request, CalculationRequest::Mortgage(MortgageInputs::default()));
        assert_eq!(request.name(), "mortgage");
    }

    #[test]
    fn test_partial_override() {
        let request = CalculationRequest::from_json_str(
            r#"{"calculator": "compound_interest", "years": 25, "compounding": "annually"}"#,
        )
        .unwrap();

        match request {
            CalculationRequest::CompoundInterest(inputs) => {
                assert_eq!(inputs.years, 25);
                assert_eq!(inputs.compounding, CompoundingFrequency::Annually);
                assert_eq!(inputs.principal, 5_000.0);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_unknown_calculator_is_json_error() {
        let err = CalculationRequest::from_json_str(r#"{"calculator": "bmi"}"#).unwrap_err();
        assert!(matches!(err, CalcError::Json(_)));
    }

    #[test]
    fn test_evaluate_auto_loan() {
        let request = CalculationRequest::from_json_str(r#"{"calculator": "auto_loan"}"#).unwrap();
        match request.evaluate().unwrap() {
            CalculationOutput::Loan { breakdown, schedule } => {
                assert_eq!(breakdown.amount_financed, 28_000.0);
                assert_abs_diff_eq!(breakdown.result.monthly_payment, 547.85, epsilon = 0.01);
                assert_eq!(schedule.rows.len(), 60);
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_rejects_invalid_inputs() {
        let request = CalculationRequest::from_json_str(
            r#"{"calculator": "loan", "interest_rate": -2.0}"#,
        )
        .unwrap();
        let err = request.evaluate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument { field: "interest_rate", .. }));
    }

    #[test]
    fn test_out_of_range_terms_rejected_before_evaluation() {
        let cases = [
            (r#"{"calculator": "investment", "years": 4000000000}"#, "years"),
            (r#"{"calculator": "loan", "years": 300000000}"#, "years"),
            (r#"{"calculator": "mortgage", "loan_term_years": 200000000}"#, "loan_term_years"),
            (r#"{"calculator": "auto_loan", "months": 120}"#, "months"),
            (r#"{"calculator": "retirement", "retirement_age": 4000000000}"#, "retirement_age"),
        ];
        for (json, expected) in cases {
            let request = CalculationRequest::from_json_str(json).unwrap();
            match request.evaluate().unwrap_err() {
                CalcError::InvalidArgument { field, .. } => assert_eq!(field, expected, "{}", json),
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn test_output_json_is_tagged() {
        let output = CalculationRequest::Investment(InvestmentInputs::default())
            .evaluate()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(json["kind"], "projection");
        assert_eq!(json["result"]["points"].as_array().unwrap().len(), 21);
    }
}
