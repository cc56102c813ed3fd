use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

pub const ISO_DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    #[default]
    Other,
}

impl MediaType {
    pub fn is_supported(self) -> bool {
        matches!(self, MediaType::Image | MediaType::Video)
    }
}

/// One astronomy picture-of-the-day entry. `date` is the unique key within a
/// collection and is kept as the provider's ISO text so downstream formatting
/// can fall back to the literal value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayRecord {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

pub fn is_iso_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, ISO_DATE_FMT).is_ok()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub kept: usize,
    pub skipped_malformed: usize,
    pub skipped_media: usize,
}

/// Normalize a raw provider body into a collection.
///
/// A single object becomes a one-element collection. Elements that fail to
/// decode, carry a date that is not `YYYY-MM-DD`, or declare an unsupported
/// media type are skipped and counted; one bad element never sinks the batch.
pub fn normalize(raw: Value) -> (Vec<DayRecord>, NormalizeReport) {
    let elements = match raw {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut report = NormalizeReport::default();
    for element in elements {
        match serde_json::from_value::<DayRecord>(element) {
            Ok(record) if !record.media_type.is_supported() => report.skipped_media += 1,
            Ok(record) if !is_iso_date(&record.date) => report.skipped_malformed += 1,
            Ok(record) => {
                report.kept += 1;
                records.push(record);
            }
            Err(_) => report.skipped_malformed += 1,
        }
    }
    (records, report)
}
