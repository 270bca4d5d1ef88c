use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataSettings, LoggingSettings, OutputFormat, ReportSettings};

const ENV_PREFIX: &str = "DASHBOARD";

/// Loads the application configuration from `config.toml` in the working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from("config.toml")
}

/// Loads the configuration from `path`, layered under `DASHBOARD__*` environment variables.
///
/// A missing file is not an error: every section has defaults. Nested keys use a
/// double underscore, e.g. `DASHBOARD__REPORT__TOP_N=10`.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), ?config, "Configuration loaded.");
    Ok(config)
}

impl Config {
    /// Parses a configuration from TOML text, without consulting the environment.
    pub fn from_toml_str(contents: &str) -> Result<Config, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Config>()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config.data.path, PathBuf::from("data/all_data.csv"));
        assert_eq!(config.report.top_n, 5);
        assert_eq!(config.report.format, OutputFormat::Table);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn reads_every_section() {
        let config = Config::from_toml_str(
            r#"
            [data]
            path = "exports/orders.csv"

            [report]
            top_n = 10
            format = "json"
            start_date = "2024-01-01"
            end_date = "2024-06-30"

            [logging]
            level = "analytics=debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.path, PathBuf::from("exports/orders.csv"));
        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.report.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(config.report.end_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn rejects_zero_top_n() {
        let err = Config::from_toml_str("[report]\ntop_n = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_reversed_date_range() {
        let err = Config::from_toml_str(
            "[report]\nstart_date = \"2024-02-01\"\nend_date = \"2024-01-01\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.report.top_n, 5);
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[report]\ntop_n = 3\n").unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.report.top_n, 3);
    }
}
