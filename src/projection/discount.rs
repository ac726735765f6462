//! Closed-form time-value helpers and inflation deflation
//!
//! Supports:
//! - Future value of a lump sum and of a level annuity-due
//! - Present value of an ordinary annuity (the loan payment identity)
//! - Deflating nominal balances to today's purchasing power

use serde::{Deserialize, Serialize};

/// Future value of `amount` after `steps` periods at `rate` per period
pub fn future_value_lump_sum(amount: f64, rate: f64, steps: u32) -> f64 {
    amount * (1.0 + rate).powf(steps as f64)
}

/// Future value of `payment` deposited at the start of each of `steps` periods
pub fn future_value_annuity_due(payment: f64, rate: f64, steps: u32) -> f64 {
    if rate.abs() < 1e-12 {
        return payment * steps as f64;
    }
    payment * (1.0 + rate) * ((1.0 + rate).powf(steps as f64) - 1.0) / rate
}

/// Present value of `payment` made at the end of each of `steps` periods
pub fn present_value_annuity_ordinary(payment: f64, rate: f64, steps: u32) -> f64 {
    if rate.abs() < 1e-12 {
        return payment * steps as f64;
    }
    payment * (1.0 - (1.0 + rate).powf(-(steps as f64))) / rate
}

/// Constant annual inflation used to express nominal balances in today's money
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchasingPower {
    /// Annual inflation in percent
    pub annual_inflation_percent: f64,
}

impl PurchasingPower {
    pub fn new(annual_inflation_percent: f64) -> Self {
        Self {
            annual_inflation_percent,
        }
    }

    /// Factor converting a nominal amount `years` from now into today's money
    pub fn deflator(&self, years: u32) -> f64 {
        (1.0 + self.annual_inflation_percent / 100.0).powf(-(years as f64))
    }

    /// Nominal amount `years` from now expressed in today's money
    pub fn real_value(&self, nominal: f64, years: u32) -> f64 {
        nominal * self.deflator(years)
    }
}

impl Default for PurchasingPower {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_lump_sum() {
        assert_relative_eq!(future_value_lump_sum(1_000.0, 0.05, 2), 1_102.5, max_relative = 1e-12);
    }

    #[test]
    fn test_annuity_due_vs_loop() {
        let mut balance = 0.0;
        for _ in 0..24 {
            balance += 150.0;
            balance *= 1.004;
        }
        assert_relative_eq!(future_value_annuity_due(150.0, 0.004, 24), balance, max_relative = 1e-12);
    }

    #[test]
    fn test_pv_annuity() {
        // $100/month for 12 months at 6% annual ≈ 1161.89
        let pv = present_value_annuity_ordinary(100.0, 0.06 / 12.0, 12);
        assert_abs_diff_eq!(pv, 1161.89, epsilon = 0.01);
    }

    #[test]
    fn test_deflation() {
        let power = PurchasingPower::new(3.0);
        assert_eq!(power.deflator(0), 1.0);
        assert_relative_eq!(power.real_value(1_030.0, 1), 1_000.0, max_relative = 1e-12);
        assert!(power.deflator(35) < power.deflator(10));
    }

    #[test]
    fn test_horizons_beyond_i32() {
        let far = 2_147_483_648;
        assert_eq!(PurchasingPower::new(3.0).deflator(far), 0.0);
        assert_eq!(PurchasingPower::new(3.0).deflator(u32::MAX), 0.0);
        assert!(future_value_lump_sum(1.0, 0.05, far).is_infinite());
        assert_relative_eq!(
            present_value_annuity_ordinary(100.0, 0.01, u32::MAX),
            10_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_annuities() {
        assert_eq!(future_value_annuity_due(50.0, 0.0, 10), 500.0);
        assert_eq!(present_value_annuity_ordinary(50.0, 0.0, 10), 500.0);
    }
}
