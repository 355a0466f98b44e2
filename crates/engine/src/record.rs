//! The module contains the `Record` type, one logged consumption event.
//!
//! A record is the same for both trackers: for energy the amount is in kcal,
//! for money it is in the base currency.
use core::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{EngineError, ResultEngine};

/// Text format of record dates, e.g. `31.12.2023`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One consumption event. Fields never change after construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    amount: f64,
    note: String,
    date: NaiveDate,
}

impl Record {
    /// Builds a record with an explicit date.
    ///
    /// Fails with [`EngineError::InvalidAmount`] if `amount` is negative, NaN
    /// or infinite.
    pub fn new(amount: f64, note: impl Into<String>, date: NaiveDate) -> ResultEngine<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(EngineError::InvalidAmount(format!(
                "{amount} must be a non-negative number"
            )));
        }

        Ok(Self {
            amount,
            note: note.into(),
            date,
        })
    }

    /// Builds a record from user input.
    ///
    /// `date` is parsed with [`parse_date`]; when it is `None` the record is
    /// dated `today`.
    pub fn parse(
        amount: f64,
        note: impl Into<String>,
        date: Option<&str>,
        today: NaiveDate,
    ) -> ResultEngine<Self> {
        let date = match date {
            Some(text) => parse_date(text)?,
            None => today,
        };
        Self::new(amount, note, date)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", format_date(self.date), self.amount, self.note)
    }
}

/// Parses a `DD.MM.YYYY` date.
///
/// The shape is checked before handing the text to chrono, which on its own
/// would also accept single-digit days and months or signed years.
///
/// ```rust
/// use chrono::NaiveDate;
/// use engine::parse_date;
///
/// assert_eq!(
///     parse_date("31.12.2023").unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
/// );
/// assert!(parse_date("31.02.2024").is_err());
/// assert!(parse_date("1.2.2024").is_err());
/// ```
pub fn parse_date(text: &str) -> ResultEngine<NaiveDate> {
    let invalid = || EngineError::Parse(text.to_string());

    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// Renders a date the way [`parse_date`] reads it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
