//! Demo configuration, read from `config.json` in the config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wheel_picker::{CalendarDate, DatePickerConfig, PickerSize, SelectorProperties, YearRange};

use crate::error::DemoError;
use crate::paths;

/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// "YYYY-MM-DD"; today when absent.
    pub start_date: Option<String>,
    pub min_year: i32,
    pub max_year: i32,
    /// Show the year wheel.
    pub show_year: bool,
    pub backwards_disabled: bool,
    pub width: u16,
    pub height: u16,
    pub row_count: usize,
    /// Draw the highlight band behind the selected row.
    pub highlight: bool,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let size = PickerSize::default();
        Self {
            start_date: None,
            min_year: YearRange::DEFAULT.min(),
            max_year: YearRange::DEFAULT.max(),
            show_year: true,
            backwards_disabled: false,
            width: size.width,
            height: size.height,
            row_count: 3,
            highlight: true,
            log_level: "debug".to_string(),
        }
    }
}

impl DemoConfig {
    /// Load from the platform config file. A missing file (or no home
    /// directory) gives the defaults.
    pub fn load() -> Result<Self, DemoError> {
        match paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, DemoError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&text).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter, DemoError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| DemoError::LogLevel(self.log_level.clone()))
    }

    pub fn start_date(&self) -> Result<CalendarDate, DemoError> {
        match &self.start_date {
            Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(CalendarDate::from)
                .map_err(|source| DemoError::StartDate {
                    value: value.clone(),
                    source,
                }),
            None => Ok(CalendarDate::today()),
        }
    }

    /// Picker configuration described by this file. The settle callback is
    /// left for the caller to attach.
    pub fn picker_config(&self) -> Result<DatePickerConfig, DemoError> {
        let year_range = if self.show_year {
            Some(YearRange::new(self.min_year, self.max_year)?)
        } else {
            None
        };
        let selector = if self.highlight {
            SelectorProperties::default()
        } else {
            SelectorProperties::disabled()
        };

        Ok(DatePickerConfig::new(self.start_date()?)
            .year_range(year_range)
            .backwards_disabled(self.backwards_disabled)
            .size(PickerSize::new(self.width, self.height))
            .row_count(self.row_count)
            .selector(selector))
    }
}
