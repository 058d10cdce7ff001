//! Interest-only and amortized payment calculations.
//!
//! All amounts are exact decimals. A non-positive principal, negative rate or
//! zero term is rejected before any arithmetic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::LoanTerms;

/// convert an annual percentage rate into a monthly decimal rate
pub fn monthly_interest_rate(annual_interest_rate_percent: Decimal) -> Rate {
    Rate::from_decimal(annual_interest_rate_percent / dec!(1200))
}

/// payment covering accrued interest only
pub fn interest_only_payment(principal: Money, annual_interest_rate_percent: Decimal) -> Result<Money> {
    validate_principal(principal)?;
    validate_rate(annual_interest_rate_percent)?;

    let monthly_rate = monthly_interest_rate(annual_interest_rate_percent);
    let payment = principal
        .checked_mul(monthly_rate.as_decimal())
        .ok_or_else(|| LoanError::overflow(format!("interest on principal {}", principal)))?;

    debug!(%principal, rate = %annual_interest_rate_percent, %payment, "interest only payment");
    Ok(payment)
}

/// fixed payment that retires `principal` over `term_months`
pub fn amortized_payment(
    principal: Money,
    annual_interest_rate_percent: Decimal,
    term_months: u32,
) -> Result<Money> {
    validate_principal(principal)?;
    validate_rate(annual_interest_rate_percent)?;
    validate_term(term_months)?;

    let monthly_rate = monthly_interest_rate(annual_interest_rate_percent);

    if monthly_rate.is_zero() {
        let payment = principal / Decimal::from(term_months);
        debug!(%principal, term_months, %payment, "zero rate amortized payment");
        return Ok(payment);
    }

    // P * r / (1 - (1 + r)^-n) == P * r * c / (c - 1) with c = (1 + r)^n
    let compound = monthly_rate
        .growth_factor(term_months)
        .ok_or_else(|| {
            LoanError::overflow(format!("compounding {} over {} months", monthly_rate, term_months))
        })?;

    let growth = compound - Decimal::ONE;
    if growth.is_zero() {
        // rate below decimal resolution
        return Ok(principal / Decimal::from(term_months));
    }

    let numerator = principal
        .as_decimal()
        .checked_mul(monthly_rate.as_decimal())
        .and_then(|n| n.checked_mul(compound))
        .ok_or_else(|| LoanError::overflow(format!("payment numerator for principal {}", principal)))?;
    let payment = numerator
        .checked_div(growth)
        .map(Money::from_decimal)
        .ok_or_else(|| LoanError::overflow(format!("payment for principal {}", principal)))?;

    debug!(
        %principal,
        rate = %annual_interest_rate_percent,
        term_months,
        %payment,
        "amortized payment"
    );
    Ok(payment)
}

/// interest paid over the life of an amortized loan
pub fn total_interest(
    principal: Money,
    annual_interest_rate_percent: Decimal,
    term_months: u32,
) -> Result<Money> {
    let payment = amortized_payment(principal, annual_interest_rate_percent, term_months)?;
    payment
        .checked_mul(Decimal::from(term_months))
        .and_then(|paid| paid.checked_sub(principal))
        .ok_or_else(|| LoanError::overflow(format!("total paid over {} months", term_months)))
}

impl LoanTerms {
    pub fn interest_only_payment(&self) -> Result<Money> {
        interest_only_payment(self.principal, self.annual_interest_rate_percent)
    }

    /// fails with `MissingTerm` when no term was given
    pub fn amortized_payment(&self) -> Result<Money> {
        let term_months = self.term_months.ok_or(LoanError::MissingTerm)?;
        amortized_payment(self.principal, self.annual_interest_rate_percent, term_months)
    }

    pub fn total_interest(&self) -> Result<Money> {
        let term_months = self.term_months.ok_or(LoanError::MissingTerm)?;
        total_interest(self.principal, self.annual_interest_rate_percent, term_months)
    }
}

fn validate_principal(principal: Money) -> Result<()> {
    if !principal.is_positive() {
        warn!(%principal, "rejected non-positive principal");
        return Err(LoanError::InvalidPrincipal { principal });
    }
    Ok(())
}

fn validate_rate(annual_interest_rate_percent: Decimal) -> Result<()> {
    if annual_interest_rate_percent < Decimal::ZERO {
        let rate = Rate::from_percentage(annual_interest_rate_percent);
        warn!(%rate, "rejected negative interest rate");
        return Err(LoanError::InvalidInterestRate { rate });
    }
    Ok(())
}

fn validate_term(term_months: u32) -> Result<()> {
    if term_months == 0 {
        warn!("rejected zero month term");
        return Err(LoanError::InvalidTerm {
            months: term_months,
        });
    }
    Ok(())
}
