//! Money budget: a [`BudgetTracker`] counting base currency units, reported
//! in any currency of a [`RateTable`].
use crate::{BudgetTracker, Clock, Language, RateTable, ResultEngine, SystemClock};

/// Rounds to two decimals, halves away from zero.
///
/// ```rust
/// use engine::round_cents;
///
/// assert_eq!(round_cents(10.452), 10.45);
/// assert_eq!(round_cents(0.125), 0.13);
/// assert_eq!(round_cents(-0.125), -0.13);
/// ```
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Tells how much money is left today, converted to `currency`.
///
/// The code is validated first: an unknown one fails with
/// [`EngineError::UnknownCurrency`] whatever the balance. The converted
/// amount is `|round_cents(remainder / rate)|` and is printed with two
/// decimals.
///
///  [`EngineError::UnknownCurrency`]: crate::EngineError::UnknownCurrency
pub fn remaining_message<C: Clock>(
    tracker: &BudgetTracker<C>,
    rates: &RateTable,
    currency: &str,
    language: Language,
) -> ResultEngine<String> {
    let rate = rates.lookup(currency)?;
    let remainder = tracker.today_remaining();
    let converted = format!("{:.2}", round_cents(remainder / rate.rate).abs());

    let message = if remainder == 0.0 {
        language.no_money().to_string()
    } else if remainder > 0.0 {
        language.money_left(&converted, &rate.suffix)
    } else {
        language.debt(&converted, &rate.suffix)
    };
    Ok(message)
}

/// A [`BudgetTracker`] whose amounts are money in the base currency of its
/// [`RateTable`].
#[derive(Clone, Debug)]
pub struct MoneyTracker<C = SystemClock> {
    tracker: BudgetTracker<C>,
    rates: RateTable,
    language: Language,
}

impl MoneyTracker<SystemClock> {
    /// Tracker using the default [`RateTable`].
    pub fn new(limit: f64) -> ResultEngine<Self> {
        BudgetTracker::new(limit).map(Self::from)
    }
}

impl<C: Clock> MoneyTracker<C> {
    pub fn with_clock(limit: f64, clock: C) -> ResultEngine<Self> {
        BudgetTracker::with_clock(limit, clock).map(Self::from)
    }

    /// Replaces the whole rate table.
    #[must_use]
    pub fn rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn tracker(&self) -> &BudgetTracker<C> {
        &self.tracker
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rates
    }

    pub fn add_record(
        &mut self,
        amount: f64,
        note: impl Into<String>,
        date: Option<&str>,
    ) -> ResultEngine<()> {
        self.tracker.add_record(amount, note, date)
    }

    pub fn remaining_message(&self, currency: &str) -> ResultEngine<String> {
        remaining_message(&self.tracker, &self.rates, currency, self.language)
    }
}

impl<C> From<BudgetTracker<C>> for MoneyTracker<C> {
    fn from(tracker: BudgetTracker<C>) -> Self {
        Self {
            tracker,
            rates: RateTable::default(),
            language: Language::default(),
        }
    }
}
