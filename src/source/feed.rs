use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::record::{self, DayRecord, NormalizeReport};
use crate::source::{FetchError, FetchSpec, RecordSource};

fn log_fetched(provider: &str, location: &str, report: NormalizeReport) {
    log(
        Level::Info,
        Domain::Source,
        "fetched",
        obj(&[
            ("provider", v_str(provider)),
            ("url", v_str(location)),
            ("kept", v_num(report.kept as f64)),
            ("skipped_malformed", v_num(report.skipped_malformed as f64)),
            ("skipped_media", v_num(report.skipped_media as f64)),
        ]),
    );
}

/// Pre-built dataset served as a static JSON document. The whole dataset
/// comes back for any spec; the window is cut downstream.
pub struct StaticFeed {
    client: Client,
    url: String,
}

impl StaticFeed {
    pub fn new(url: String) -> Self {
        Self { client: Client::new(), url }
    }
}

#[async_trait]
impl RecordSource for StaticFeed {
    async fn fetch(&self, _spec: FetchSpec) -> Result<Vec<DayRecord>, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: self.url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: self.url.clone(), status });
        }

        let body = resp
            .text()
            .await
            .map_err(|source| FetchError::Transport { url: self.url.clone(), source })?;
        let raw: Value = serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { url: self.url.clone(), source })?;

        let (records, report) = record::normalize(raw);
        log_fetched("static_feed", &self.url, report);
        Ok(records)
    }
}

/// The same dataset shape read from a local file, for offline runs.
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileFeed {
    async fn fetch(&self, _spec: FetchSpec) -> Result<Vec<DayRecord>, FetchError> {
        let display = self.path.display().to_string();
        let body = std::fs::read_to_string(&self.path)
            .map_err(|source| FetchError::File { path: display.clone(), source })?;
        let raw: Value = serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { url: display.clone(), source })?;

        let (records, report) = record::normalize(raw);
        log_fetched("file_feed", &display, report);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread().build().unwrap()
    }

    #[test]
    fn test_file_feed_loads_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"date": "2024-01-02", "title": "B", "media_type": "image", "url": "https://x/b.jpg"}},
                {{"date": "2024-01-01", "title": "A", "media_type": "image", "url": "https://x/a.jpg"}},
                {{"date": "2024-01-03", "title": "skipped", "media_type": "audio", "url": "https://x/c.mp3"}}
            ]"#
        )
        .unwrap();

        let feed = FileFeed::new(file.path());
        let records = runtime().block_on(feed.fetch(FetchSpec::Bulk)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "B");
    }

    #[test]
    fn test_file_feed_missing_file_is_explicit_error() {
        let feed = FileFeed::new("/nonexistent/apod-data.json");
        let err = runtime().block_on(feed.fetch(FetchSpec::Bulk)).unwrap_err();
        assert!(matches!(err, FetchError::File { .. }));
        assert!(err.to_string().contains("/nonexistent/apod-data.json"));
    }

    #[test]
    fn test_file_feed_garbage_body_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let feed = FileFeed::new(file.path());
        let err = runtime().block_on(feed.fetch(FetchSpec::Bulk)).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
