//! The module contains [`BudgetTracker`], the aggregation engine shared by
//! the energy and money trackers.
//!
//! A tracker owns a daily limit and an append-only list of [`Record`]s. The
//! three queries re-read "today" from the tracker's [`Clock`] on every call:
//!
//! - [`today_total`]: sum of the records dated today.
//! - [`today_remaining`]: limit minus today's total, possibly negative.
//! - [`week_total`]: sum of the records in `(today - 7 days, today]`.
//!
//!  [`today_total`]: BudgetTracker::today_total
//!  [`today_remaining`]: BudgetTracker::today_remaining
//!  [`week_total`]: BudgetTracker::week_total
use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::{Clock, EngineError, Record, ResultEngine, SystemClock};

/// Length of the trailing window used by [`BudgetTracker::week_total`].
pub const WEEK_DAYS: u64 = 7;

/// Daily limit plus the records logged against it.
#[derive(Clone, Debug)]
pub struct BudgetTracker<C = SystemClock> {
    limit: f64,
    records: Vec<Record>,
    clock: C,
}

/// Snapshot of the tracker queries, taken at a single "today".
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Status {
    pub today: NaiveDate,
    pub limit: f64,
    pub today_total: f64,
    pub today_remaining: f64,
    pub week_total: f64,
}

/// Checks that `limit` is usable as a daily limit: finite and not negative.
pub fn validate_limit(limit: f64) -> ResultEngine<f64> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(EngineError::InvalidLimit(format!(
            "{limit} must be a non-negative number"
        )));
    }
    Ok(limit)
}

impl BudgetTracker<SystemClock> {
    /// Tracker reading today from the local system date.
    pub fn new(limit: f64) -> ResultEngine<Self> {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> BudgetTracker<C> {
    /// Fails with [`EngineError::InvalidLimit`] unless `limit` passes
    /// [`validate_limit`].
    pub fn with_clock(limit: f64, clock: C) -> ResultEngine<Self> {
        Ok(Self {
            limit: validate_limit(limit)?,
            records: Vec::new(),
            clock,
        })
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Builds a [`Record`] and appends it. On error nothing is appended.
    ///
    /// `date` is `DD.MM.YYYY`; without it the record is dated today.
    pub fn add_record(
        &mut self,
        amount: f64,
        note: impl Into<String>,
        date: Option<&str>,
    ) -> ResultEngine<()> {
        let record = Record::parse(amount, note, date, self.clock.today())?;
        self.push(record);
        Ok(())
    }

    /// Appends an already built record.
    pub fn push(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "record added"
        );
        self.records.push(record);
    }

    pub fn today_total(&self) -> f64 {
        self.total_on(self.clock.today())
    }

    /// `limit - today_total()`. Negative when the limit is exceeded.
    pub fn today_remaining(&self) -> f64 {
        self.remaining_on(self.clock.today())
    }

    /// Sum of the records dated after `today - 7 days` and up to today.
    ///
    /// A record dated exactly seven days ago is outside the window, as is any
    /// record dated in the future.
    pub fn week_total(&self) -> f64 {
        self.week_total_on(self.clock.today())
    }

    /// All three queries evaluated against the same date.
    pub fn status(&self) -> Status {
        let today = self.clock.today();
        Status {
            today,
            limit: self.limit,
            today_total: self.total_on(today),
            today_remaining: self.remaining_on(today),
            week_total: self.week_total_on(today),
        }
    }

    fn total_on(&self, day: NaiveDate) -> f64 {
        self.sum_where(|date| date == day)
    }

    fn remaining_on(&self, day: NaiveDate) -> f64 {
        self.limit - self.total_on(day)
    }

    fn week_total_on(&self, today: NaiveDate) -> f64 {
        match today.checked_sub_days(Days::new(WEEK_DAYS)) {
            Some(week_start) => self.sum_where(|date| week_start < date && date <= today),
            None => self.sum_where(|date| date <= today),
        }
    }

    fn sum_where(&self, keep: impl Fn(NaiveDate) -> bool) -> f64 {
        self.records
            .iter()
            .filter(|record| keep(record.date()))
            .map(Record::amount)
            .sum()
    }
}
