use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loan_payments::{
    AmortizationSchedule, Decimal, LoanProgram, LoanTerms, Money, Settings,
};

/// interest-only and conventional loan payment calculator
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// increase log verbosity (-v, -vv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// print results as JSON
    #[clap(long, global = true)]
    json: bool,

    /// JSON settings file, overrides environment settings
    #[clap(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// monthly payment covering interest only
    InterestOnly(RateArgs),
    /// fixed monthly payment retiring the principal over the term
    Conventional(TermArgs),
    /// month-by-month amortization schedule
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug)]
struct RateArgs {
    /// amount borrowed
    #[clap(short, long)]
    principal: Money,

    /// annual interest rate in percent, e.g. 5 for 5%
    #[clap(short, long)]
    rate: Decimal,
}

#[derive(Args, Debug)]
struct TermArgs {
    #[clap(flatten)]
    loan: RateArgs,

    /// loan term in months
    #[clap(short, long)]
    months: u32,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[clap(flatten)]
    term: TermArgs,

    /// loan program: conventional or interest-only
    #[clap(long, default_value = "conventional")]
    program: LoanProgram,

    /// loan start date (YYYY-MM-DD), defaults to today
    #[clap(long)]
    start: Option<NaiveDate>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::from_env().context("reading settings from environment")?,
    };
    init_tracing(cli.verbose, &settings);
    debug!(?settings, "resolved settings");

    match &cli.command {
        Command::InterestOnly(args) => {
            let terms = LoanTerms::interest_only(args.principal, args.rate);
            print_quote(cli, &settings, LoanProgram::InterestOnly, &terms)
        }
        Command::Conventional(args) => {
            let terms = LoanTerms::amortized(args.loan.principal, args.loan.rate, args.months);
            print_quote(cli, &settings, LoanProgram::Conventional, &terms)
        }
        Command::Schedule(args) => print_schedule(cli, &settings, args),
    }
}

fn print_quote(cli: &Cli, settings: &Settings, program: LoanProgram, terms: &LoanTerms) -> Result<()> {
    let quote = program
        .quote(terms)
        .with_context(|| format!("calculating {} payment", program))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", quote.describe(settings.display_decimals));
    }
    Ok(())
}

fn print_schedule(cli: &Cli, settings: &Settings, args: &ScheduleArgs) -> Result<()> {
    let terms = LoanTerms::amortized(
        args.term.loan.principal,
        args.term.loan.rate,
        args.term.months,
    );
    let start = match args.start {
        Some(date) => date
            .and_hms_opt(0, 0, 0)
            .context("building start timestamp")?
            .and_utc(),
        None => Utc::now(),
    };

    let schedule = AmortizationSchedule::generate(&terms, args.program, start)
        .with_context(|| format!("generating {} schedule", args.program))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    let dp = settings.display_decimals;
    println!(
        "{:>4}  {:<10}  {:>14}  {:>12}  {:>12}  {:>14}",
        "#", "date", "payment", "interest", "principal", "balance"
    );
    for p in &schedule.payments {
        println!(
            "{:>4}  {:<10}  {:>14}  {:>12}  {:>12}  {:>14}",
            p.payment_number,
            p.payment_date.format("%Y-%m-%d"),
            p.payment_amount.to_fixed(dp),
            p.interest_portion.to_fixed(dp),
            p.principal_portion.to_fixed(dp),
            p.ending_balance.to_fixed(dp),
        );
    }
    println!();
    println!("total interest: {}", schedule.total_interest.to_fixed(dp));
    println!("total paid:     {}", schedule.total_payment.to_fixed(dp));
    Ok(())
}

fn init_tracing(verbose: u8, settings: &Settings) {
    let filter = match verbose {
        0 => settings.log_filter.clone(),
        1 => "loan_payments=debug".to_string(),
        _ => "trace".to_string(),
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
