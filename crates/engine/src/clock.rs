//! Sources of "today" for the trackers.
//!
//! Trackers never read the system clock directly: every query asks its
//! [`Clock`] for the current date, so a tracker alive across midnight sees
//! the new day and tests can pin the date.
use std::cell::Cell;

use chrono::{Days, Local, NaiveDate};

/// Something able to tell the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local date of the machine running the process.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on a given date until it is moved by hand.
///
/// The date lives in a [`Cell`] so it can be moved while a tracker holds the
/// clock.
///
/// ```rust
/// use chrono::NaiveDate;
/// use engine::{Clock, FixedClock};
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let clock = FixedClock::new(start);
/// clock.advance(1);
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
}

impl FixedClock {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    /// Moves the clock to `date`.
    pub fn set(&self, date: NaiveDate) {
        self.today.set(date);
    }

    /// Moves the clock `days` days forward. Saturates at the last
    /// representable date.
    pub fn advance(&self, days: u64) {
        let today = self.today.get();
        self.today
            .set(today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
