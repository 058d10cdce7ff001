use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Money;
use crate::errors::LoanError;

/// terms of a loan as supplied by the borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// amount borrowed
    pub principal: Money,
    /// nominal annual rate as a percentage (5 for 5%)
    #[serde(rename = "interest_rate")]
    pub annual_interest_rate_percent: Decimal,
    /// number of monthly payments, only needed for amortized loans
    #[serde(rename = "months", default, skip_serializing_if = "Option::is_none")]
    pub term_months: Option<u32>,
}

impl LoanTerms {
    /// terms for an interest-only loan
    pub fn interest_only(principal: Money, annual_interest_rate_percent: Decimal) -> Self {
        Self {
            principal,
            annual_interest_rate_percent,
            term_months: None,
        }
    }

    /// terms for an amortized loan
    pub fn amortized(
        principal: Money,
        annual_interest_rate_percent: Decimal,
        term_months: u32,
    ) -> Self {
        Self {
            principal,
            annual_interest_rate_percent,
            term_months: Some(term_months),
        }
    }

    pub fn with_term(mut self, term_months: u32) -> Self {
        self.term_months = Some(term_months);
        self
    }
}

/// supported loan programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanProgram {
    /// pay accrued interest only, principal never reduced
    InterestOnly,
    /// fixed payment retiring principal over the term
    Conventional,
}

impl LoanProgram {
    pub const ALL: [LoanProgram; 2] = [LoanProgram::InterestOnly, LoanProgram::Conventional];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanProgram::InterestOnly => "interest-only",
            LoanProgram::Conventional => "conventional",
        }
    }

    /// label used in formatted payment sentences
    pub fn label(&self) -> &'static str {
        match self {
            LoanProgram::InterestOnly => "interest only",
            LoanProgram::Conventional => "conventional",
        }
    }
}

impl fmt::Display for LoanProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanProgram {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "interest-only" | "interestonly" => Ok(LoanProgram::InterestOnly),
            "conventional" | "amortized" => Ok(LoanProgram::Conventional),
            other => Err(LoanError::UnknownProgram {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_terms_constructors() {
        let io = LoanTerms::interest_only(Money::from_major(30_000), dec!(5));
        assert_eq!(io.term_months, None);

        let conv = io.with_term(180);
        assert_eq!(conv, LoanTerms::amortized(Money::from_major(30_000), dec!(5), 180));
    }

    #[test]
    fn test_terms_json_shape() {
        let terms: LoanTerms =
            serde_json::from_str(r#"{"principal": "30000", "interest_rate": "5", "months": 180}"#)
                .unwrap();
        assert_eq!(terms.principal, Money::from_major(30_000));
        assert_eq!(terms.annual_interest_rate_percent, dec!(5));
        assert_eq!(terms.term_months, Some(180));

        let io: LoanTerms =
            serde_json::from_str(r#"{"principal": "30000", "interest_rate": "5"}"#).unwrap();
        assert_eq!(io.term_months, None);

        let json = serde_json::to_value(io).unwrap();
        assert!(json.get("months").is_none());

        // principal is held at money precision
        let fine: LoanTerms =
            serde_json::from_str(r#"{"principal": "1.123456789012", "interest_rate": "5"}"#)
                .unwrap();
        assert_eq!(fine.principal.to_string(), "1.12345679");
    }

    #[test]
    fn test_program_parsing() {
        assert_eq!("interest-only".parse::<LoanProgram>().unwrap(), LoanProgram::InterestOnly);
        assert_eq!("Interest_Only".parse::<LoanProgram>().unwrap(), LoanProgram::InterestOnly);
        assert_eq!("conventional".parse::<LoanProgram>().unwrap(), LoanProgram::Conventional);
        assert!(matches!(
            "balloon".parse::<LoanProgram>(),
            Err(LoanError::UnknownProgram { .. })
        ));

        for program in LoanProgram::ALL {
            assert_eq!(program.to_string().parse::<LoanProgram>().unwrap(), program);
        }
    }
}
