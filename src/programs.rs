use serde::Serialize;

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{LoanProgram, LoanTerms};

/// decimal places used in payment sentences
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

/// payment computed for one loan program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentQuote {
    pub program: LoanProgram,
    pub terms: LoanTerms,
    pub payment: Money,
}

impl PaymentQuote {
    /// sentence form, e.g. "The conventional loan payment is 237.24"
    pub fn describe(&self, decimals: u32) -> String {
        format!(
            "The {} loan payment is {}",
            self.program.label(),
            self.payment.to_fixed(decimals)
        )
    }
}

impl LoanProgram {
    /// raw monthly payment for these terms
    pub fn calculate(&self, terms: &LoanTerms) -> Result<Money> {
        match self {
            LoanProgram::InterestOnly => terms.interest_only_payment(),
            LoanProgram::Conventional => terms.amortized_payment(),
        }
    }

    pub fn quote(&self, terms: &LoanTerms) -> Result<PaymentQuote> {
        Ok(PaymentQuote {
            program: *self,
            terms: *terms,
            payment: self.calculate(terms)?,
        })
    }

    pub fn describe(&self, terms: &LoanTerms, decimals: u32) -> Result<String> {
        Ok(self.quote(terms)?.describe(decimals))
    }
}

pub fn calculate_interest_only_loan_payment(terms: &LoanTerms) -> Result<String> {
    LoanProgram::InterestOnly.describe(terms, DEFAULT_DISPLAY_DECIMALS)
}

pub fn calculate_conventional_loan_payment(terms: &LoanTerms) -> Result<String> {
    LoanProgram::Conventional.describe(terms, DEFAULT_DISPLAY_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LoanError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_interest_only_sentence() {
        let terms = LoanTerms::interest_only(Money::from_major(30_000), dec!(5));
        assert_eq!(
            calculate_interest_only_loan_payment(&terms).unwrap(),
            "The interest only loan payment is 125.00"
        );
    }

    #[test]
    fn test_conventional_sentence() {
        let terms = LoanTerms::amortized(Money::from_major(30_000), dec!(5), 180);
        assert_eq!(
            calculate_conventional_loan_payment(&terms).unwrap(),
            "The conventional loan payment is 237.24"
        );
    }

    #[test]
    fn test_interest_only_ignores_term() {
        let terms = LoanTerms::amortized(Money::from_major(30_000), dec!(5), 180);
        assert_eq!(
            LoanProgram::InterestOnly.calculate(&terms).unwrap(),
            terms.interest_only_payment().unwrap()
        );
    }

    #[test]
    fn test_conventional_requires_term() {
        let terms = LoanTerms::interest_only(Money::from_major(30_000), dec!(5));
        assert_eq!(
            calculate_conventional_loan_payment(&terms),
            Err(LoanError::MissingTerm)
        );
    }

    #[test]
    fn test_custom_precision() {
        let terms = LoanTerms::amortized(Money::from_major(30_000), dec!(5), 180);
        let quote = LoanProgram::Conventional.quote(&terms).unwrap();
        assert_eq!(quote.describe(4), "The conventional loan payment is 237.2381");
        assert_eq!(quote.describe(0), "The conventional loan payment is 237");
    }
}
