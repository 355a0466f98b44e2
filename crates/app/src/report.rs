//! Builds a tracker from the command line and reports on it.
use core::fmt;

use engine::{BudgetTracker, Clock, EnergyTracker, MoneyTracker, Record, Status, format_date};
use serde::Serialize;

use crate::{error::Result, input::RecordInput, settings::Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Energy,
    Cash,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub status: Status,
    pub message: String,
    pub records: Vec<Record>,
}

pub fn energy<C: Clock>(settings: &Settings, clock: C, records: &[RecordInput]) -> Result<Report> {
    let mut tracker =
        EnergyTracker::with_clock(settings.energy.limit, clock)?.language(settings.language);
    for record in records {
        tracker.add_record(record.amount, record.note.clone(), record.date.as_deref())?;
    }

    Ok(Report {
        message: tracker.remaining_message(),
        ..snapshot(Kind::Energy, tracker.tracker())
    })
}

pub fn cash<C: Clock>(settings: &Settings, clock: C, records: &[RecordInput]) -> Result<Report> {
    let mut tracker = MoneyTracker::with_clock(settings.cash.limit, clock)?
        .rates(settings.rates.clone())
        .language(settings.language);
    for record in records {
        tracker.add_record(record.amount, record.note.clone(), record.date.as_deref())?;
    }

    let currency = &settings.cash.currency;
    Ok(Report {
        currency: Some(currency.clone()),
        message: tracker.remaining_message(currency)?,
        ..snapshot(Kind::Cash, tracker.tracker())
    })
}

fn snapshot<C: Clock>(kind: Kind, tracker: &BudgetTracker<C>) -> Report {
    Report {
        kind,
        currency: None,
        status: tracker.status(),
        message: String::new(),
        records: tracker.records().to_vec(),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.kind {
            Kind::Energy => " kcal",
            Kind::Cash => "",
        };
        writeln!(f, "date:      {}", format_date(self.status.today))?;
        writeln!(f, "limit:     {}{unit}", self.status.limit)?;
        writeln!(f, "today:     {}{unit}", self.status.today_total)?;
        writeln!(f, "remaining: {}{unit}", self.status.today_remaining)?;
        writeln!(f, "week:      {}{unit}", self.status.week_total)?;
        for record in &self.records {
            writeln!(f, "  {record}")?;
        }
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::{EngineError, FixedClock};

    use super::*;
    use crate::{error::AppError, input::parse_record};

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn records(specs: &[&str]) -> Vec<RecordInput> {
        specs.iter().map(|spec| parse_record(spec).unwrap()).collect()
    }

    #[test]
    fn energy_report_sums_records() {
        let settings = Settings::default();
        let report = energy(
            &settings,
            clock(),
            &records(&["500;breakfast", "1600;dinner", "300;snack;10.03.2024"]),
        )
        .unwrap();

        assert_eq!(report.kind, Kind::Energy);
        assert_eq!(report.status.today_total, 2100.0);
        assert_eq!(report.status.today_remaining, -100.0);
        assert_eq!(report.status.week_total, 2400.0);
        assert_eq!(report.message, "Stop eating!");
        assert_eq!(report.records.len(), 3);
    }

    #[test]
    fn cash_report_uses_configured_currency() {
        let mut settings = Settings::default();
        settings.cash.currency = "usd".to_string();
        let report = cash(&settings, clock(), &records(&["200;coffee"])).unwrap();

        assert_eq!(report.currency.as_deref(), Some("usd"));
        assert_eq!(report.message, "Remaining today: 10.45 USD");
    }

    #[test]
    fn cash_report_fails_on_unknown_currency() {
        let mut settings = Settings::default();
        settings.cash.currency = "gbp".to_string();
        let err = cash(&settings, clock(), &[]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Engine(EngineError::UnknownCurrency(ref code)) if code == "gbp"
        ));
    }

    #[test]
    fn unusable_limit_fails_before_any_record() {
        let mut settings = Settings::default();
        settings.energy.limit = f64::NAN;
        settings.cash.limit = -1.0;
        let err = energy(&settings, clock(), &[]).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::InvalidLimit(_))));
        let err = cash(&settings, clock(), &[]).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::InvalidLimit(_))));
    }

    #[test]
    fn bad_date_surfaces_as_engine_error() {
        let err = energy(&Settings::default(), clock(), &records(&["1;x;31.02.2024"])).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::Parse(_))));
    }

    #[test]
    fn json_report_is_flat() {
        let report = energy(&Settings::default(), clock(), &records(&["250;soup"])).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "energy");
        assert_eq!(json["today_total"], 250.0);
        assert_eq!(json["records"][0]["note"], "soup");
        assert!(json.get("currency").is_none());
    }

    #[test]
    fn text_report_ends_with_message() {
        let report = energy(&Settings::default(), clock(), &records(&["250;soup"])).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("date:      15.03.2024\n"));
        assert!(text.contains("  15.03.2024 250 soup\n"));
        assert!(text.ends_with("should not exceed 1750 kcal"));
    }
}
