use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::record::{self, DayRecord, ISO_DATE_FMT};
use crate::select::WINDOW_SIZE;
use crate::source::{window_end, FetchError, FetchSpec, RecordSource};

/// Live picture-of-the-day API. Range mode asks for the closed 9-day
/// interval, bulk mode for the provider's recent-items fallback.
pub struct ApodApi {
    client: Client,
    base: String,
    api_key: String,
}

impl ApodApi {
    pub fn new(base: String, api_key: String) -> Self {
        Self { client: Client::new(), base, api_key }
    }

    fn query(spec: FetchSpec) -> String {
        match spec {
            FetchSpec::Range { start } => format!(
                "start_date={}&end_date={}",
                start.format(ISO_DATE_FMT),
                window_end(start).format(ISO_DATE_FMT)
            ),
            FetchSpec::Bulk => format!("count={WINDOW_SIZE}"),
        }
    }

    /// Request URL without the credential, safe for logs and errors.
    fn public_url(&self, spec: FetchSpec) -> String {
        format!("{}?{}", self.base, Self::query(spec))
    }

    fn request_url(&self, spec: FetchSpec) -> String {
        format!("{}?api_key={}&{}", self.base, self.api_key, Self::query(spec))
    }
}

#[async_trait]
impl RecordSource for ApodApi {
    async fn fetch(&self, spec: FetchSpec) -> Result<Vec<DayRecord>, FetchError> {
        let public_url = self.public_url(spec);
        let resp = self
            .client
            .get(self.request_url(spec))
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: public_url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: public_url, status });
        }

        let body = resp
            .text()
            .await
            .map_err(|source| FetchError::Transport { url: public_url.clone(), source })?;
        let raw: Value = serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { url: public_url.clone(), source })?;

        let (records, report) = record::normalize(raw);
        log(
            Level::Info,
            Domain::Source,
            "fetched",
            obj(&[
                ("provider", v_str("apod_api")),
                ("url", v_str(&public_url)),
                ("kept", v_num(report.kept as f64)),
                ("skipped_malformed", v_num(report.skipped_malformed as f64)),
                ("skipped_media", v_num(report.skipped_media as f64)),
            ]),
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn api() -> ApodApi {
        ApodApi::new("https://api.example.com/apod".to_string(), "k-123".to_string())
    }

    fn start(text: &str) -> FetchSpec {
        FetchSpec::Range {
            start: NaiveDate::parse_from_str(text, ISO_DATE_FMT).unwrap(),
        }
    }

    #[test]
    fn test_range_query_covers_nine_days() {
        assert_eq!(
            ApodApi::query(start("2024-01-01")),
            "start_date=2024-01-01&end_date=2024-01-09"
        );
    }

    #[test]
    fn test_bulk_query_requests_window_count() {
        assert_eq!(ApodApi::query(FetchSpec::Bulk), "count=9");
    }

    #[test]
    fn test_public_url_omits_credential() {
        let url = api().public_url(FetchSpec::Bulk);
        assert!(!url.contains("k-123"), "credential must never reach logs: {url}");
        assert!(url.starts_with("https://api.example.com/apod?"));
    }

    #[test]
    fn test_request_url_carries_credential_once() {
        let url = api().request_url(start("2024-01-01"));
        assert_eq!(url.matches("api_key=k-123").count(), 1);
        assert!(url.contains("end_date=2024-01-09"));
    }
}
