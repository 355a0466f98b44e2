//! Energy budget: a [`BudgetTracker`] counting kcal.
use crate::{BudgetTracker, Clock, Language, ResultEngine, SystemClock};

/// Tells whether something more can be eaten today.
///
/// With a positive remainder the message embeds it as is, otherwise it is a
/// plain "stop eating".
pub fn remaining_message<C: Clock>(tracker: &BudgetTracker<C>, language: Language) -> String {
    let remainder = tracker.today_remaining();
    if remainder > 0.0 {
        language.eat_more(remainder)
    } else {
        language.stop_eating().to_string()
    }
}

/// A [`BudgetTracker`] whose amounts are kcal.
#[derive(Clone, Debug)]
pub struct EnergyTracker<C = SystemClock> {
    tracker: BudgetTracker<C>,
    language: Language,
}

impl EnergyTracker<SystemClock> {
    pub fn new(limit: f64) -> ResultEngine<Self> {
        BudgetTracker::new(limit).map(Self::from)
    }
}

impl<C: Clock> EnergyTracker<C> {
    pub fn with_clock(limit: f64, clock: C) -> ResultEngine<Self> {
        BudgetTracker::with_clock(limit, clock).map(Self::from)
    }

    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn tracker(&self) -> &BudgetTracker<C> {
        &self.tracker
    }

    pub fn add_record(
        &mut self,
        amount: f64,
        note: impl Into<String>,
        date: Option<&str>,
    ) -> ResultEngine<()> {
        self.tracker.add_record(amount, note, date)
    }

    pub fn remaining_message(&self) -> String {
        remaining_message(&self.tracker, self.language)
    }
}

impl<C> From<BudgetTracker<C>> for EnergyTracker<C> {
    fn from(tracker: BudgetTracker<C>) -> Self {
        Self {
            tracker,
            language: Language::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::FixedClock;

    fn tracker(limit: f64) -> EnergyTracker<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        EnergyTracker::with_clock(limit, FixedClock::new(today)).unwrap()
    }

    #[test]
    fn positive_remainder_is_embedded() {
        let mut tracker = tracker(2000.0);
        tracker.add_record(500.0, "breakfast", None).unwrap();
        assert_eq!(
            tracker.remaining_message(),
            "You may still eat more today, but total energy intake should not exceed 1500 kcal"
        );
    }

    #[test]
    fn fractional_remainder_is_not_rounded() {
        let mut tracker = tracker(2000.0);
        tracker.add_record(0.5, "mint", None).unwrap();
        assert!(tracker.remaining_message().ends_with("not exceed 1999.5 kcal"));
    }

    #[test]
    fn zero_remainder_means_stop() {
        let mut tracker = tracker(800.0);
        tracker.add_record(800.0, "feast", None).unwrap();
        assert_eq!(tracker.remaining_message(), "Stop eating!");
    }

    #[test]
    fn russian_phrasing() {
        let mut tracker = tracker(1000.0).language(Language::Ru);
        tracker.add_record(400.0, "обед", None).unwrap();
        assert_eq!(
            tracker.remaining_message(),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 600 кКал"
        );

        tracker.add_record(600.0, "ужин", None).unwrap();
        assert_eq!(tracker.remaining_message(), "Хватит есть!");
    }
}
