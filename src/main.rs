//! Finance Calc CLI
//!
//! Command-line interface for running loan and savings calculations

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use finance_calc::calculators::{
    AutoLoanInputs, CompoundInterestInputs, CompoundingFrequency, InvestmentInputs, LoanInputs,
    MortgageInputs, RetirementInputs,
};
use finance_calc::projection::ProjectionParameters;
use finance_calc::report::{format_currency, round_to, write_output_csv, write_sweep_csv};
use finance_calc::{CalculationOutput, CalculationRequest, ScenarioRunner};

#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the full result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Write the schedule or balance series to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly payment on a home loan
    Mortgage {
        #[arg(long, default_value_t = 300_000.0)]
        home_price: f64,
        #[arg(long, default_value_t = 60_000.0)]
        down_payment: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 6.5)]
        rate: f64,
        #[arg(long, default_value_t = 30)]
        years: u32,
    },

    /// Monthly payment on a personal loan
    Loan {
        #[arg(long, default_value_t = 10_000.0)]
        amount: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 5.5)]
        rate: f64,
        #[arg(long, default_value_t = 3)]
        years: u32,
    },

    /// Monthly payment on a vehicle loan
    AutoLoan {
        #[arg(long, default_value_t = 35_000.0)]
        price: f64,
        #[arg(long, default_value_t = 5_000.0)]
        down_payment: f64,
        #[arg(long, default_value_t = 2_000.0)]
        trade_in: f64,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 6.5)]
        rate: f64,
        #[arg(long, default_value_t = 60)]
        months: u32,
    },

    /// Lump sum plus monthly savings with compounding
    Compound {
        #[arg(long, default_value_t = 5_000.0)]
        principal: f64,
        #[arg(long, default_value_t = 200.0)]
        monthly: f64,
        #[arg(long, default_value_t = 10)]
        years: u32,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 5.0)]
        rate: f64,
        /// annually, quarterly, monthly, daily (or 1, 4, 12, 365)
        #[arg(long, default_value = "monthly")]
        compounding: CompoundingFrequency,
    },

    /// Investment growth with monthly contributions
    Investment {
        #[arg(long, default_value_t = 5_000.0)]
        initial: f64,
        #[arg(long, default_value_t = 200.0)]
        monthly: f64,
        /// Annual return in percent
        #[arg(long, default_value_t = 7.0)]
        rate: f64,
        #[arg(long, default_value_t = 20)]
        years: u32,
    },

    /// Retirement savings in nominal and today's money
    Retirement {
        #[arg(long, default_value_t = 30)]
        current_age: u32,
        #[arg(long, default_value_t = 65)]
        retirement_age: u32,
        #[arg(long, default_value_t = 50_000.0)]
        savings: f64,
        #[arg(long, default_value_t = 1_000.0)]
        monthly: f64,
        /// Annual return in percent
        #[arg(long, default_value_t = 7.0)]
        return_rate: f64,
        /// Annual inflation in percent
        #[arg(long, default_value_t = 3.0)]
        inflation: f64,
    },

    /// Run a calculation described in a JSON request file
    Run {
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Final balance of a compound projection across a range of rates
    Sweep {
        #[arg(long, default_value_t = 5_000.0)]
        principal: f64,
        #[arg(long, default_value_t = 200.0)]
        monthly: f64,
        #[arg(long, default_value_t = 10)]
        years: u32,
        #[arg(long, default_value = "monthly")]
        compounding: CompoundingFrequency,
        /// Lowest annual rate in percent
        #[arg(long, default_value_t = 1.0)]
        from: f64,
        /// Highest annual rate in percent
        #[arg(long, default_value_t = 10.0)]
        to: f64,
        #[arg(long, default_value_t = 0.5)]
        step: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let request = match cli.command {
        Commands::Mortgage { home_price, down_payment, rate, years } => {
            CalculationRequest::Mortgage(MortgageInputs {
                home_price,
                down_payment,
                interest_rate: rate,
                loan_term_years: years,
            })
        }
        Commands::Loan { amount, rate, years } => CalculationRequest::Loan(LoanInputs {
            amount,
            interest_rate: rate,
            years,
        }),
        Commands::AutoLoan { price, down_payment, trade_in, rate, months } => {
            CalculationRequest::AutoLoan(AutoLoanInputs {
                price,
                down_payment,
                trade_in,
                interest_rate: rate,
                months,
            })
        }
        Commands::Compound { principal, monthly, years, rate, compounding } => {
            CalculationRequest::CompoundInterest(CompoundInterestInputs {
                principal,
                monthly_contribution: monthly,
                years,
                interest_rate: rate,
                compounding,
            })
        }
        Commands::Investment { initial, monthly, rate, years } => {
            CalculationRequest::Investment(InvestmentInputs { initial, monthly, rate, years })
        }
        Commands::Retirement { current_age, retirement_age, savings, monthly, return_rate, inflation } => {
            CalculationRequest::Retirement(RetirementInputs {
                current_age,
                retirement_age,
                current_savings: savings,
                monthly_contribution: monthly,
                return_rate,
                inflation_rate: inflation,
            })
        }
        Commands::Run { request } => CalculationRequest::from_path(&request)
            .with_context(|| format!("failed to load request {}", request.display()))?,
        Commands::Sweep { principal, monthly, years, compounding, from, to, step } => {
            let base = ProjectionParameters::new(
                principal,
                monthly * 12.0,
                from,
                years,
                compounding.periods_per_year(),
            );
            base.validate()?;
            return run_sweep(base, from, to, step, &cli.output);
        }
    };

    let output = request.evaluate()?;

    if cli.output.json {
        println!("{}", output.to_json()?);
    } else {
        print_output(request.name(), &output);
    }

    if let Some(path) = &cli.output.csv {
        write_output_csv(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !cli.output.json {
            println!("\nFull series written to: {}", path.display());
        }
    }

    Ok(())
}

fn run_sweep(base: ProjectionParameters, from: f64, to: f64, step: f64, output: &OutputArgs) -> Result<()> {
    let start = Instant::now();
    let runner = ScenarioRunner::new(base);
    let rates = ScenarioRunner::rate_grid(from, to, step);
    let sweep = runner.sweep_rates(&rates);
    info!("{} scenarios projected in {:?}", sweep.len(), start.elapsed());

    if output.json {
        println!("{}", serde_json::to_string_pretty(&sweep)?);
    } else {
        println!("{:>8} {:>16} {:>16} {:>16}", "Rate", "Final", "Contributed", "Growth");
        println!("{}", "-".repeat(59));
        for scenario in &sweep {
            println!(
                "{:>7.2}% {:>16} {:>16} {:>16}",
                scenario.annual_rate_percent,
                format_currency(scenario.result.final_balance, 0),
                format_currency(scenario.result.total_contributed, 0),
                format_currency(scenario.result.total_growth, 0),
            );
        }
    }

    if let Some(path) = &output.csv {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_sweep_csv(file, &sweep)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("sweep written to {}", path.display());
    }

    Ok(())
}

fn print_output(name: &str, output: &CalculationOutput) {
    println!("{} calculator", name.replace('_', " "));
    println!("{}", "=".repeat(40));

    match output {
        CalculationOutput::Loan { breakdown, schedule } => {
            println!("  Amount Financed: {}", format_currency(breakdown.amount_financed, 2));
            println!("  Monthly Payment: {}", format_currency(breakdown.result.monthly_payment, 2));
            println!("  Total Interest:  {}", format_currency(breakdown.result.total_interest, 2));
            println!("  Total Payment:   {}", format_currency(breakdown.result.total_payment, 2));

            if !schedule.rows.is_empty() {
                println!("\n{:>5} {:>14} {:>14}", "Year", "Principal", "Interest");
                println!("{}", "-".repeat(35));
                for (year, principal, interest) in schedule.yearly_totals() {
                    println!(
                        "{:>5} {:>14} {:>14}",
                        year,
                        format_currency(principal, 2),
                        format_currency(interest, 2)
                    );
                }
            }
        }
        CalculationOutput::Projection { summary, result } => {
            println!("  Final Balance:   {}", format_currency(summary.final_balance, 0));
            println!("  Total Invested:  {}", format_currency(summary.total_contributed, 0));
            println!("  Total Interest:  {}", format_currency(summary.total_growth, 0));
            println!("  Growth Share:    {:.1}%", round_to(summary.growth_share * 100.0, 1));

            println!("\n{:>5} {:>16} {:>16}", "Year", "Balance", "Invested");
            println!("{}", "-".repeat(39));
            for point in &result.points {
                println!(
                    "{:>5} {:>16} {:>16}",
                    point.period,
                    format_currency(point.balance, 0),
                    format_currency(point.cumulative_contribution, 0)
                );
            }
        }
        CalculationOutput::Retirement { result } => {
            println!("  Balance at Retirement:  {}", format_currency(result.projection.final_balance, 0));
            println!("  In Today's Money:       {}", format_currency(result.real_final_balance, 0));
            println!("  Total Contributed:      {}", format_currency(result.projection.total_contributed, 0));

            println!("\n{:>4} {:>16} {:>16}", "Age", "Balance", "Real Balance");
            println!("{}", "-".repeat(38));
            for point in &result.points {
                println!(
                    "{:>4} {:>16} {:>16}",
                    point.age,
                    format_currency(point.balance, 0),
                    format_currency(point.real_balance, 0)
                );
            }
        }
    }
}
