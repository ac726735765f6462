//! Error types for calculator input validation and reporting

use thiserror::Error;

/// Result type for fallible calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised outside the pure engine entry points
#[derive(Debug, Error)]
pub enum CalcError {
    /// A numeric input was negative, non-finite, or zero where a positive value is required
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    /// Filesystem error while reading a request or writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON request/response error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

/// Reject zero counts (terms, compounding frequencies)
pub(crate) fn ensure_positive_count(field: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(CalcError::invalid(field, "must be at least 1"));
    }
    Ok(())
}

/// Reject values outside `[min, max]`, including NaN
pub(crate) fn ensure_in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(CalcError::invalid(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

/// Reject counts outside `[min, max]`
pub(crate) fn ensure_count_in_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(CalcError::invalid(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}
