//! Demo error type.

use std::path::PathBuf;

use thiserror::Error;
use wheel_picker::PickerError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid start_date {value:?}: {source}")]
    StartDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid log_level {0:?}")]
    LogLevel(String),
    #[error("picker configuration: {0}")]
    Picker(#[from] PickerError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
