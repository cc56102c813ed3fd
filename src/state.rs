use chrono::NaiveDate;

use crate::record::{DayRecord, ISO_DATE_FMT};

pub const DEFAULT_APOD_BASE: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

#[derive(Clone)]
pub struct Config {
    /// Injected access credential; required only by the live API source.
    pub api_key: Option<String>,
    pub apod_base: String,
    pub feed_url: String,
    pub feed_path: String,
    /// Optional anchor for the startup load.
    pub start_date: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("APOD_API_KEY").ok().filter(|k| !k.is_empty()),
            apod_base: std::env::var("APOD_BASE").unwrap_or_else(|_| DEFAULT_APOD_BASE.to_string()),
            feed_url: std::env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            feed_path: std::env::var("FEED_PATH").unwrap_or_else(|_| "./data.json".to_string()),
            start_date: std::env::var("START_DATE")
                .ok()
                .and_then(|v| NaiveDate::parse_from_str(&v, ISO_DATE_FMT).ok()),
        }
    }
}

/// The owned collection of fetched records.
///
/// Created once at startup, replaced wholesale on each successful fetch and
/// never merged; the selection window is recomputed from it on every user
/// action. Nothing here survives the process.
#[derive(Debug, Default)]
pub struct AppState {
    records: Vec<DayRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, records: Vec<DayRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date of the most recent record, used as the default reference anchor.
    pub fn newest_date(&self) -> Option<NaiveDate> {
        self.records
            .iter()
            .filter_map(|r| NaiveDate::parse_from_str(&r.date, ISO_DATE_FMT).ok())
            .max()
    }
}
