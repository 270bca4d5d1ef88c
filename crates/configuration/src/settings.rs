use crate::error::ConfigError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the order export lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Path to the CSV order export.
    pub path: PathBuf,
}

/// Parameters for building and printing the sales report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// How many rows the best/worst product and RFM leaderboards hold.
    pub top_n: usize,
    pub format: OutputFormat,
    /// The default start of the reporting range. Falls back to the first order date.
    pub start_date: Option<NaiveDate>,
    /// The default end of the reporting range. Falls back to the last order date.
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, e.g. "info" or "analytics=debug". `RUST_LOG` takes precedence.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/all_data.csv"),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_n: 5,
            format: OutputFormat::Table,
            start_date: None,
            end_date: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Rejects settings that would make the report meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data.path must not be empty".to_string(),
            ));
        }
        if self.report.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "report.top_n must be greater than 0".to_string(),
            ));
        }
        if let (Some(start), Some(end)) = (self.report.start_date, self.report.end_date) {
            if start > end {
                return Err(ConfigError::ValidationError(format!(
                    "report.start_date {start} is after report.end_date {end}"
                )));
            }
        }
        Ok(())
    }
}
