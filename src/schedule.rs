use chrono::{DateTime, Months, Utc};
use serde::Serialize;
use tracing::debug;

use crate::calculator::monthly_interest_rate;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::{LoanProgram, LoanTerms};

/// scheduled payment in amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub payment_date: DateTime<Utc>,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// amortization schedule
#[derive(Debug, Clone, Serialize)]
pub struct AmortizationSchedule {
    pub terms: LoanTerms,
    pub program: LoanProgram,
    pub start_date: DateTime<Utc>,
    pub payments: Vec<ScheduledPayment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationSchedule {
    /// generate payment schedule, first payment one month after `start_date`
    pub fn generate(
        terms: &LoanTerms,
        program: LoanProgram,
        start_date: DateTime<Utc>,
    ) -> Result<Self> {
        let term_months = terms.term_months.ok_or(LoanError::MissingTerm)?;
        let periodic_payment = program.calculate(terms)?;

        // the final payment date bounds the number of periods
        add_months(start_date, term_months)?;

        let payments = match program {
            LoanProgram::Conventional => {
                equal_installments(terms, periodic_payment, term_months, start_date)?
            }
            LoanProgram::InterestOnly => {
                interest_only(terms, periodic_payment, term_months, start_date)?
            }
        };

        let total_interest = checked_sum(payments.iter().map(|p| p.interest_portion), "total interest")?;
        let total_payment = checked_sum(payments.iter().map(|p| p.payment_amount), "total payment")?;

        debug!(
            %program,
            term_months,
            %total_interest,
            %total_payment,
            "generated amortization schedule"
        );

        Ok(Self {
            terms: *terms,
            program,
            start_date,
            payments,
            total_interest,
            total_payment,
        })
    }

    /// get payment for specific period (1-based)
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        let index = payment_number.checked_sub(1)?;
        self.payments.get(index as usize)
    }

    /// remaining balance after payment; principal before the first, zero past the last
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        if payment_number == 0 {
            return self.terms.principal;
        }
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(Money::ZERO)
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// equal installments, last period settles any rounding residue
fn equal_installments(
    terms: &LoanTerms,
    installment: Money,
    term_months: u32,
    start_date: DateTime<Utc>,
) -> Result<Vec<ScheduledPayment>> {
    let monthly_rate = monthly_interest_rate(terms.annual_interest_rate_percent);

    let mut payments = Vec::new();
    let mut balance = terms.principal;
    let mut cumulative_interest = Money::ZERO;
    let mut cumulative_principal = Money::ZERO;

    for i in 1..=term_months {
        let payment_date = add_months(start_date, i)?;
        let interest_portion = balance * monthly_rate.as_decimal();

        let (payment_amount, principal_portion) = if i == term_months {
            let settlement = balance
                .checked_add(interest_portion)
                .ok_or_else(|| LoanError::overflow("final payment"))?;
            (settlement, balance)
        } else {
            (installment, installment - interest_portion)
        };

        cumulative_interest = cumulative_interest
            .checked_add(interest_portion)
            .ok_or_else(|| LoanError::overflow("cumulative interest"))?;
        cumulative_principal += principal_portion;

        let ending_balance = balance - principal_portion;

        payments.push(ScheduledPayment {
            payment_number: i,
            payment_date,
            beginning_balance: balance,
            payment_amount,
            principal_portion,
            interest_portion,
            ending_balance,
            cumulative_interest,
            cumulative_principal,
        });

        balance = ending_balance;
    }

    Ok(payments)
}

/// interest only with balloon payment
fn interest_only(
    terms: &LoanTerms,
    interest_payment: Money,
    term_months: u32,
    start_date: DateTime<Utc>,
) -> Result<Vec<ScheduledPayment>> {
    let principal = terms.principal;

    let mut payments = Vec::new();
    let mut cumulative_interest = Money::ZERO;

    for i in 1..=term_months {
        let payment_date = add_months(start_date, i)?;
        let is_last = i == term_months;

        cumulative_interest = cumulative_interest
            .checked_add(interest_payment)
            .ok_or_else(|| LoanError::overflow("cumulative interest"))?;

        let (payment_amount, principal_portion, ending_balance) = if is_last {
            // balloon payment
            let balloon = interest_payment
                .checked_add(principal)
                .ok_or_else(|| LoanError::overflow("balloon payment"))?;
            (balloon, principal, Money::ZERO)
        } else {
            (interest_payment, Money::ZERO, principal)
        };

        payments.push(ScheduledPayment {
            payment_number: i,
            payment_date,
            beginning_balance: principal,
            payment_amount,
            principal_portion,
            interest_portion: interest_payment,
            ending_balance,
            cumulative_interest,
            cumulative_principal: principal_portion,
        });
    }

    Ok(payments)
}

fn checked_sum(mut amounts: impl Iterator<Item = Money>, what: &str) -> Result<Money> {
    amounts
        .try_fold(Money::ZERO, Money::checked_add)
        .ok_or_else(|| LoanError::overflow(what))
}

fn add_months(date: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("payment date {} months after {} is out of range", months, date),
        })
}
