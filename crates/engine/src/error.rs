//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Parse`] thrown when a record date is not written as `DD.MM.YYYY`.
//! - [`UnknownCurrency`] thrown when a currency code is not in the [`RateTable`].
//! - [`InvalidAmount`] thrown when a record amount is negative or not finite.
//! - [`InvalidLimit`] thrown when a daily limit is negative or not finite.
//! - [`InvalidRate`] thrown when an exchange rate is not a positive number.
//!
//!  [`Parse`]: EngineError::Parse
//!  [`UnknownCurrency`]: EngineError::UnknownCurrency
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidLimit`]: EngineError::InvalidLimit
//!  [`InvalidRate`]: EngineError::InvalidRate
//!  [`RateTable`]: super::currency::RateTable
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("\"{0}\" is not a valid date, expected DD.MM.YYYY")]
    Parse(String),
    #[error("\"{0}\" currency not supported!")]
    UnknownCurrency(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
}
