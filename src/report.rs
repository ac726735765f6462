//! Presentation rounding and CSV export
//!
//! The engines return unrounded values; rounding only happens here, when a
//! figure is displayed or written out.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::calculators::RetirementResult;
use crate::error::Result;
use crate::loan::AmortizationSchedule;
use crate::projection::ProjectionResult;
use crate::request::CalculationOutput;
use crate::scenario::RateScenario;

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Currency display with thousands separators, e.g. `$1,516.96`
pub fn format_currency(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    match fraction {
        Some(f) => format!("{}${}.{}", sign, grouped, f),
        None => format!("{}${}", sign, grouped),
    }
}

#[derive(Serialize)]
struct SeriesRow {
    period: u32,
    balance: f64,
    cumulative_contribution: f64,
    growth: f64,
}

/// Write the projection series as `period,balance,cumulative_contribution,growth`
pub fn write_projection_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in &result.points {
        csv.serialize(SeriesRow {
            period: point.period,
            balance: point.balance,
            cumulative_contribution: point.cumulative_contribution,
            growth: point.growth(),
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the schedule as `month,payment,interest,principal,remaining_balance`
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &AmortizationSchedule) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &schedule.rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write retirement points as `age,balance,real_balance,cumulative_contribution`
pub fn write_retirement_csv<W: Write>(writer: W, result: &RetirementResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for point in &result.points {
        csv.serialize(point)?;
    }
    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct SweepRow {
    annual_rate_percent: f64,
    final_balance: f64,
    total_contributed: f64,
    total_growth: f64,
}

/// Write one row per swept rate as `annual_rate_percent,final_balance,total_contributed,total_growth`
pub fn write_sweep_csv<W: Write>(writer: W, sweep: &[RateScenario]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for scenario in sweep {
        csv.serialize(SweepRow {
            annual_rate_percent: scenario.annual_rate_percent,
            final_balance: scenario.result.final_balance,
            total_contributed: scenario.result.total_contributed,
            total_growth: scenario.result.total_growth,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write whichever series the output carries to a CSV file
pub fn write_output_csv<P: AsRef<Path>>(path: P, output: &CalculationOutput) -> Result<()> {
    let file = File::create(path.as_ref())?;
    match output {
        CalculationOutput::Loan { schedule, .. } => write_schedule_csv(file, schedule)?,
        CalculationOutput::Projection { result, .. } => write_projection_csv(file, result)?,
        CalculationOutput::Retirement { result } => write_retirement_csv(file, result)?,
    }
    info!("series written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::RetirementInputs;
    use crate::loan::{compute_amortization_schedule, LoanParameters};
    use crate::projection::{compute_compound_projection, ProjectionParameters};
    use crate::scenario::ScenarioRunner;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1516.963256, 2), 1516.96);
        assert_eq!(round_to(277.7777, 2), 277.78);
        assert_eq!(round_to(41_893.5, 0), 41_894.0);
        assert_eq!(round_to(-2.345, 1), -2.3);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1516.963256, 2), "$1,516.96");
        assert_eq!(format_currency(1_234_567.0, 0), "$1,234,567");
        assert_eq!(format_currency(999.999, 2), "$1,000.00");
        assert_eq!(format_currency(12.5, 2), "$12.50");
        assert_eq!(format_currency(-4_500.0, 0), "-$4,500");
    }

    #[test]
    fn test_projection_csv() {
        let result = compute_compound_projection(&ProjectionParameters::new(100.0, 0.0, 0.0, 2, 1));
        let mut buf = Vec::new();
        write_projection_csv(&mut buf, &result).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "period,balance,cumulative_contribution,growth");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0,100.0,100.0,0.0");
    }

    #[test]
    fn test_schedule_csv() {
        let schedule = compute_amortization_schedule(&LoanParameters::new(1_200.0, 0.0, 12));
        let mut buf = Vec::new();
        write_schedule_csv(&mut buf, &schedule).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "month,payment,interest,principal,remaining_balance");
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[12], "12,100.0,0.0,100.0,0.0");
    }

    #[test]
    fn test_sweep_csv() {
        let runner = ScenarioRunner::new(ProjectionParameters::new(100.0, 0.0, 0.0, 2, 1));
        let sweep = runner.sweep_rates(&[0.0, 10.0]);
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &sweep).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "annual_rate_percent,final_balance,total_contributed,total_growth");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0.0,100.0,100.0,0.0");
        assert!(lines[2].starts_with("10.0,"));
    }

    #[test]
    fn test_retirement_csv_header() {
        let result = RetirementInputs::default().calculate();
        let mut buf = Vec::new();
        write_retirement_csv(&mut buf, &result).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("age,balance,real_balance,cumulative_contribution\n30,"));
        assert_eq!(text.lines().count(), 37);
    }
}
