use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid principal: {principal}, must be greater than zero")]
    InvalidPrincipal {
        principal: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {months} months, must be at least one")]
    InvalidTerm {
        months: u32,
    },

    #[error("term in months required for this loan program")]
    MissingTerm,

    #[error("unknown loan program: {name}")]
    UnknownProgram {
        name: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl LoanError {
    /// arithmetic on `what` exceeded the decimal range
    pub fn overflow(what: impl std::fmt::Display) -> Self {
        LoanError::CalculationError {
            message: format!("{} overflows", what),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
