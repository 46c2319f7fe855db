//! Simulator configuration (environment + command line).

use thiserror::Error;

pub const DAYS_ENV: &str = "GILDEDROSE_DAYS";
pub const FORMAT_ENV: &str = "GILDEDROSE_FORMAT";

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid day count {value:?}: expected a non-negative integer")]
    InvalidDays { value: String },

    #[error("unknown output format {value:?}: expected \"text\" or \"json\"")]
    UnknownFormat { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Days to advance after the initial snapshot.
    pub days: u32,
    pub format: OutputFormat,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            format: OutputFormat::default(),
        }
    }
}

impl SimulatorConfig {
    /// Load from the process: first CLI argument, then environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let days_arg = std::env::args().nth(1);
        Self::resolve(days_arg.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve configuration from an optional days argument and a variable lookup.
    ///
    /// The argument wins over `GILDEDROSE_DAYS`. Unset values fall back to defaults.
    pub fn resolve<F>(days_arg: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let days = match days_arg.map(str::to_string).or_else(|| lookup(DAYS_ENV)) {
            Some(raw) => parse_days(&raw)?,
            None => {
                tracing::warn!("{DAYS_ENV} not set; simulating {DEFAULT_DAYS} days");
                DEFAULT_DAYS
            }
        };

        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self { days, format })
    }
}

fn parse_days(raw: &str) -> Result<u32, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidDays {
        value: raw.to_string(),
    })
}
