//! Exchange rates used by the money tracker.
//!
//! Amounts are recorded in a base currency. A [`RateTable`] maps a lowercase
//! currency code to how many base units one unit of that currency is worth,
//! plus the suffix shown after converted amounts.
//!
//! The table is read-only once built: to use different rates, build a new
//! table and attach it to a new tracker.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

pub const RUB_RATE: f64 = 1.0;
pub const USD_RATE: f64 = 76.54;
pub const EUR_RATE: f64 = 90.21;

/// Value of one unit of a currency in base units, and its display suffix.
///
/// An empty suffix is replaced by the uppercased code when the rate is put in
/// a [`RateTable`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub rate: f64,
    #[serde(default)]
    pub suffix: String,
}

impl Rate {
    pub fn new(rate: f64, suffix: impl Into<String>) -> Self {
        Self {
            rate,
            suffix: suffix.into(),
        }
    }
}

/// Currency code -> [`Rate`] mapping.
///
/// The default table holds `rub` (the base currency), `usd` and `eur`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Rate>", into = "BTreeMap<String, Rate>")]
pub struct RateTable {
    rates: BTreeMap<String, Rate>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` pairs.
    ///
    /// Codes are stored lowercase. Every rate must be a positive finite
    /// number. A rate without suffix gets the uppercased code.
    pub fn from_rates<I, S>(rates: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = (S, Rate)>,
        S: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (code, mut rate) in rates {
            let code = normalize(code.as_ref());
            if rate.suffix.trim().is_empty() {
                rate.suffix = code.to_ascii_uppercase();
            }
            if !rate.rate.is_finite() || rate.rate <= 0.0 {
                return Err(EngineError::InvalidRate(format!(
                    "{code}: {} must be a positive number",
                    rate.rate
                )));
            }
            table.insert(code, rate);
        }
        Ok(Self { rates: table })
    }

    /// Looks up `code` after trimming and lowercasing it.
    pub fn lookup(&self, code: &str) -> ResultEngine<&Rate> {
        self.rates.get(&normalize(code)).ok_or_else(|| {
            tracing::warn!(code, "unknown currency requested");
            EngineError::UnknownCurrency(code.to_string())
        })
    }

    /// Supported codes, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let rates = [
            ("rub", Rate::new(RUB_RATE, "руб")),
            ("usd", Rate::new(USD_RATE, "USD")),
            ("eur", Rate::new(EUR_RATE, "Euro")),
        ];
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, Rate>> for RateTable {
    type Error = EngineError;

    fn try_from(value: BTreeMap<String, Rate>) -> Result<Self, Self::Error> {
        Self::from_rates(value)
    }
}

impl From<RateTable> for BTreeMap<String, Rate> {
    fn from(value: RateTable) -> Self {
        value.rates
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_currencies() {
        let table = RateTable::default();
        assert_eq!(table.codes().collect::<Vec<_>>(), ["eur", "rub", "usd"]);
        assert_eq!(table.lookup("rub").unwrap().rate, 1.0);
        assert_eq!(table.lookup("usd").unwrap(), &Rate::new(76.54, "USD"));
        assert_eq!(table.lookup("eur").unwrap().suffix, "Euro");
    }

    #[test]
    fn lookup_normalizes_code() {
        let table = RateTable::default();
        assert_eq!(table.lookup(" USD ").unwrap().rate, USD_RATE);
    }

    #[test]
    fn lookup_unknown_code_is_typed_error() {
        let table = RateTable::default();
        assert_eq!(
            table.lookup("gbp"),
            Err(EngineError::UnknownCurrency("gbp".to_string()))
        );
    }

    #[test]
    fn from_rates_rejects_non_positive_rates() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = RateTable::from_rates([("chf", Rate::new(bad, "CHF"))]);
            assert!(matches!(result, Err(EngineError::InvalidRate(_))));
        }
    }

    #[test]
    fn missing_suffix_defaults_to_code() {
        let table = RateTable::from_rates([("gbp", Rate::new(100.0, ""))]).unwrap();
        assert_eq!(table.lookup("gbp").unwrap().suffix, "GBP");
    }

    #[test]
    fn from_rates_replaces_default_table() {
        let table = RateTable::from_rates([
            ("EUR", Rate::new(1.0, "€")),
            ("usd", Rate::new(0.92, "$")),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("eur").unwrap().suffix, "€");
        assert!(table.lookup("rub").is_err());
    }
}
