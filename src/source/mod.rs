use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::record::DayRecord;
use crate::state::Config;

mod apod;
mod feed;

pub use apod::ApodApi;
pub use feed::{FileFeed, StaticFeed};

/// The range request spans 9 calendar days: `[start, start + 8]` inclusive.
pub const RANGE_SPAN_DAYS: u64 = 8;

/// Last day of the range window anchored at `start`.
pub fn window_end(start: NaiveDate) -> NaiveDate {
    start.checked_add_days(Days::new(RANGE_SPAN_DAYS)).unwrap_or(start)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSpec {
    /// Closed 9-day interval starting at `start`.
    Range { start: NaiveDate },
    /// Provider's recent-items fallback, sized to the gallery window.
    Bulk,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot read feed file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A provider of day-record collections.
///
/// Implementations either honor `FetchSpec` as a remote query (the live API)
/// or return their entire dataset regardless of the spec (the feeds); the
/// gallery window is always cut downstream by the selector, so every source
/// yields the same window shape. Callers receive a normalized collection or
/// an explicit error, never a partial result.
#[async_trait]
pub trait RecordSource {
    async fn fetch(&self, spec: FetchSpec) -> Result<Vec<DayRecord>, FetchError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Api,
    Feed,
    File,
}

impl SourceKind {
    pub fn from_env() -> Self {
        match std::env::var("SOURCE").unwrap_or_else(|_| "api".to_string()).as_str() {
            "feed" => SourceKind::Feed,
            "file" => SourceKind::File,
            _ => SourceKind::Api,
        }
    }

    pub fn build(self, cfg: &Config) -> Result<Box<dyn RecordSource + Send + Sync>> {
        match self {
            SourceKind::Api => {
                let key = cfg
                    .api_key
                    .clone()
                    .ok_or_else(|| anyhow!("SOURCE=api requires APOD_API_KEY"))?;
                Ok(Box::new(ApodApi::new(cfg.apod_base.clone(), key)))
            }
            SourceKind::Feed => Ok(Box::new(StaticFeed::new(cfg.feed_url.clone()))),
            SourceKind::File => Ok(Box::new(FileFeed::new(cfg.feed_path.clone()))),
        }
    }
}
