use clap::{Args, Parser, Subcommand};
use engine::Language;

use crate::input::{RecordInput, parse_limit, parse_record};

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Track today's spending of calories or money against a daily limit")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override log level (e.g. `debug`).
    #[arg(long, global = true)]
    pub level: Option<String>,
    /// Override message language (`en` or `ru`).
    #[arg(long, global = true)]
    pub language: Option<Language>,
    /// Print the report as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Daily energy budget, amounts in kcal.
    Energy(EnergyArgs),
    /// Daily money budget, amounts in the base currency.
    Cash(CashArgs),
}

#[derive(Debug, Args)]
pub struct EnergyArgs {
    /// Daily limit in kcal.
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<f64>,
    /// A record, `AMOUNT;NOTE[;DD.MM.YYYY]`. Repeatable.
    #[arg(long = "record", value_name = "AMOUNT;NOTE[;DATE]", value_parser = parse_record)]
    pub records: Vec<RecordInput>,
}

#[derive(Debug, Args)]
pub struct CashArgs {
    /// Daily limit in the base currency.
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<f64>,
    /// Currency the remainder is reported in.
    #[arg(long)]
    pub currency: Option<String>,
    /// A record, `AMOUNT;NOTE[;DD.MM.YYYY]`. Repeatable.
    #[arg(long = "record", value_name = "AMOUNT;NOTE[;DATE]", value_parser = parse_record)]
    pub records: Vec<RecordInput>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_cash_command() {
        let cli = Cli::try_parse_from([
            "tally",
            "--json",
            "cash",
            "--limit",
            "1000",
            "--currency",
            "usd",
            "--record",
            "200;coffee",
            "--record",
            "50;cake;01.03.2024",
        ])
        .unwrap();

        assert!(cli.json);
        let Command::Cash(args) = cli.command else {
            panic!("expected cash command");
        };
        assert_eq!(args.limit, Some(1000.0));
        assert_eq!(args.currency.as_deref(), Some("usd"));
        assert_eq!(args.records.len(), 2);
        assert_eq!(args.records[1].date.as_deref(), Some("01.03.2024"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tally", "energy", "--language", "ru"]).unwrap();
        assert_eq!(cli.language, Some(Language::Ru));
        assert!(matches!(cli.command, Command::Energy(_)));
    }

    #[test]
    fn unusable_limit_is_rejected() {
        for limit in ["NaN", "inf", "-5"] {
            let result = Cli::try_parse_from(["tally", "cash", "--limit", limit]);
            assert!(result.is_err(), "{limit:?} should be rejected");
        }
    }

    #[test]
    fn malformed_record_is_rejected() {
        assert!(Cli::try_parse_from(["tally", "energy", "--record", "lots;cake"]).is_err());
    }
}
