use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Calculation error: arithmetic overflow while summing '{0}'")]
    Overflow(String),
}
