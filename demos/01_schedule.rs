/// amortization schedule for a conventional loan
use loan_payments::chrono::{TimeZone, Utc};
use loan_payments::{AmortizationSchedule, LoanProgram, LoanTerms, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== amortization schedule ===\n");

    let terms = LoanTerms::amortized(Money::from_major(10_000), dec!(8), 12);
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let schedule = AmortizationSchedule::generate(&terms, LoanProgram::Conventional, start)?;

    for payment in &schedule.payments {
        println!(
            "{:>2} {}  pay {:>8.2}  interest {:>7.2}  balance {:>9.2}",
            payment.payment_number,
            payment.payment_date.format("%Y-%m-%d"),
            payment.payment_amount,
            payment.interest_portion,
            payment.ending_balance,
        );
    }

    println!("\ntotal interest: {:.2}", schedule.total_interest);
    println!("total paid:     {:.2}", schedule.total_payment);

    Ok(())
}
