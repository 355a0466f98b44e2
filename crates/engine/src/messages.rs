//! Locale-specific phrasing of the tracker messages.
use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language used to phrase the remaining-budget messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub(crate) fn eat_more(self, remainder: f64) -> String {
        match self {
            Language::En => format!(
                "You may still eat more today, but total energy intake should not exceed {remainder} kcal"
            ),
            Language::Ru => format!(
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {remainder} кКал"
            ),
        }
    }

    pub(crate) fn stop_eating(self) -> &'static str {
        match self {
            Language::En => "Stop eating!",
            Language::Ru => "Хватит есть!",
        }
    }

    pub(crate) fn no_money(self) -> &'static str {
        match self {
            Language::En => "No money left, hang in there",
            Language::Ru => "Денег нет, держись",
        }
    }

    pub(crate) fn money_left(self, amount: &str, suffix: &str) -> String {
        match self {
            Language::En => format!("Remaining today: {amount} {suffix}"),
            Language::Ru => format!("На сегодня осталось {amount} {suffix}"),
        }
    }

    pub(crate) fn debt(self, amount: &str, suffix: &str) -> String {
        match self {
            Language::En => format!("{}: your debt is {amount} {suffix}", self.no_money()),
            Language::Ru => format!("{}: твой долг - {amount} {suffix}", self.no_money()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}
