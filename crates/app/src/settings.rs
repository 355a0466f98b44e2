//! Settings for the `tally` command line.
//!
//! Values are layered, later sources win:
//!
//! 1. built-in defaults,
//! 2. an optional TOML file (`config/tally.toml` or `--config`),
//! 3. `TALLY_*` environment variables (`__` separates nested keys, e.g.
//!    `TALLY_CASH__LIMIT=500`),
//! 4. command-line flags.
//!
//! Both limits must be non-negative finite numbers once every layer is
//! applied.
//!
//! A `[rates]` table in the file replaces the built-in rate table wholesale:
//!
//! ```toml
//! level = "debug"
//! language = "ru"
//!
//! [energy]
//! limit = 2200
//!
//! [cash]
//! limit = 1500
//! currency = "usd"
//!
//! [rates.usd]
//! rate = 76.54
//! suffix = "USD"
//! ```
//!
//! `suffix` may be left out, in which case the uppercased code is shown, so a
//! single variable such as `TALLY_RATES__GBP__RATE=100` is enough to add a
//! currency.
use engine::{Language, RateTable};
use serde::Deserialize;

use crate::{
    cli::{Cli, Command},
    error::Result,
};

const DEFAULT_CONFIG_PATH: &str = "config/tally.toml";
const ENV_PREFIX: &str = "TALLY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Energy {
    pub limit: f64,
}

impl Default for Energy {
    fn default() -> Self {
        Self { limit: 2000.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cash {
    pub limit: f64,
    pub currency: String,
}

impl Default for Cash {
    fn default() -> Self {
        Self {
            limit: 1000.0,
            currency: "rub".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level passed to the tracing filter.
    pub level: String,
    pub language: Language,
    pub energy: Energy,
    pub cash: Cash,
    pub rates: RateTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            language: Language::default(),
            energy: Energy::default(),
            cash: Cash::default(),
            rates: RateTable::default(),
        }
    }
}

pub fn load(cli: &Cli) -> Result<Settings> {
    load_with_env(cli, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(cli: &Cli, env: config::Environment) -> Result<Settings> {
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(cli.config.is_some()))
        .add_source(env)
        .build()?;
    let mut settings: Settings = settings.try_deserialize()?;

    if let Some(level) = &cli.level {
        settings.level = level.clone();
    }
    if let Some(language) = cli.language {
        settings.language = language;
    }
    match &cli.command {
        Command::Energy(args) => {
            if let Some(limit) = args.limit {
                settings.energy.limit = limit;
            }
        }
        Command::Cash(args) => {
            if let Some(limit) = args.limit {
                settings.cash.limit = limit;
            }
            if let Some(currency) = &args.currency {
                settings.cash.currency = currency.clone();
            }
        }
    }

    engine::validate_limit(settings.energy.limit)?;
    engine::validate_limit(settings.cash.limit)?;

    Ok(settings)
}
