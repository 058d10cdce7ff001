pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod programs;
pub mod schedule;
pub mod types;

// re-export key types
pub use calculator::{amortized_payment, interest_only_payment, monthly_interest_rate, total_interest};
pub use config::Settings;
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use programs::{
    calculate_conventional_loan_payment, calculate_interest_only_loan_payment, PaymentQuote,
};
pub use schedule::{AmortizationSchedule, ScheduledPayment};
pub use types::{LoanProgram, LoanTerms};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
