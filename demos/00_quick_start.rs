/// quick start - the two loan programs
use loan_payments::{
    calculate_conventional_loan_payment, calculate_interest_only_loan_payment, LoanTerms, Money,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let interest_only = LoanTerms::interest_only(Money::from_major(30_000), dec!(5));
    let conventional = LoanTerms::amortized(Money::from_major(30_000), dec!(5), 180);

    println!("{}", calculate_interest_only_loan_payment(&interest_only)?);
    println!("{}", calculate_conventional_loan_payment(&conventional)?);

    Ok(())
}
