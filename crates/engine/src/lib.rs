//! Daily budget bookkeeping.
//!
//! A [`BudgetTracker`] holds a daily limit and the [`Record`]s logged against
//! it, and answers three questions: how much was consumed today, how much is
//! left today, and how much was consumed over the last seven days.
//!
//! Two flavours format the remainder for humans:
//!
//! - [`EnergyTracker`] for food energy (kcal).
//! - [`MoneyTracker`] for money, converting the remainder with a [`RateTable`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use engine::{FixedClock, MoneyTracker};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let mut cash = MoneyTracker::with_clock(1000.0, FixedClock::new(today)).unwrap();
//! cash.add_record(200.0, "coffee", None).unwrap();
//! cash.add_record(50.0, "last week's lunch", Some("08.03.2024")).unwrap();
//!
//! assert_eq!(cash.tracker().today_remaining(), 800.0);
//! assert_eq!(cash.remaining_message("usd").unwrap(), "Remaining today: 10.45 USD");
//! ```
pub use cash::{MoneyTracker, round_cents};
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{Rate, RateTable};
pub use energy::EnergyTracker;
pub use error::EngineError;
pub use messages::Language;
pub use record::{DATE_FORMAT, Record, format_date, parse_date};
pub use tracker::{BudgetTracker, Status, WEEK_DAYS, validate_limit};

pub mod cash;
mod clock;
pub mod currency;
pub mod energy;
mod error;
mod messages;
mod record;
mod tracker;

pub type ResultEngine<T> = Result<T, EngineError>;
