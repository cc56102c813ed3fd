use chrono::NaiveDate;
use url::Url;

use crate::record::{DayRecord, MediaType, ISO_DATE_FMT};

/// Shown when a record has no renderable media reference.
pub const PLACEHOLDER_URL: &str = "https://placehold.co/600x400?text=MEDIA+NOT+AVAILABLE";

const DATE_LABEL_FMT: &str = "%m/%d/%Y";

/// What the detail overlay should render for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    /// Full-size image, preferring `hdurl` when the record carries one.
    Image { url: String },
    /// Embeddable video player location.
    Video { url: String },
    /// Nothing renderable for this media kind.
    Unavailable,
}

/// Display-ready descriptor for one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor {
    pub title: String,
    pub date_label: String,
    pub explanation: String,
    /// Media reference for the card tile itself.
    pub thumbnail: String,
    pub detail: DetailMedia,
}

/// `MM/DD/YYYY` label for an ISO date; malformed text passes through as-is.
pub fn format_date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, ISO_DATE_FMT) {
        Ok(parsed) => parsed.format(DATE_LABEL_FMT).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Derive a thumbnail location from a video URL's platform identifier.
///
/// Covers the embed forms the upstream feeds actually serve: YouTube embeds
/// and watch links, youtu.be short links, and Vimeo player links. Returns
/// `None` when no identifier can be extracted.
pub fn derived_thumbnail(video_url: &str) -> Option<String> {
    let parsed = Url::parse(video_url).ok()?;
    let host = parsed.host_str()?;

    if host == "youtu.be" {
        let id = parsed.path_segments()?.find(|s| !s.is_empty())?.to_string();
        return youtube_thumbnail(&id);
    }
    if host.ends_with("youtube.com") || host.ends_with("youtube-nocookie.com") {
        if let Some(segments) = parsed.path_segments() {
            if let Some(id) = segments.skip_while(|s| *s != "embed").nth(1) {
                return youtube_thumbnail(id);
            }
        }
        if let Some((_, id)) = parsed.query_pairs().find(|(k, _)| k == "v") {
            return youtube_thumbnail(&id);
        }
        return None;
    }
    if host == "vimeo.com" || host.ends_with(".vimeo.com") {
        let id = parsed
            .path_segments()?
            .find(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))?;
        return Some(format!("https://vumbnail.com/{id}.jpg"));
    }
    None
}

fn youtube_thumbnail(id: &str) -> Option<String> {
    let valid = !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    valid.then(|| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

/// Map a record into its display descriptor. Total: every media kind and
/// every malformed field resolves to something renderable.
pub fn to_card(record: &DayRecord) -> CardDescriptor {
    let (thumbnail, detail) = match record.media_type {
        MediaType::Image => {
            let detail_url = record
                .hdurl
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| record.url.clone());
            (record.url.clone(), DetailMedia::Image { url: detail_url })
        }
        MediaType::Video => {
            let thumbnail = record
                .thumbnail_url
                .clone()
                .filter(|t| !t.is_empty())
                .or_else(|| derived_thumbnail(&record.url))
                .unwrap_or_else(|| PLACEHOLDER_URL.to_string());
            (thumbnail, DetailMedia::Video { url: record.url.clone() })
        }
        MediaType::Other => (PLACEHOLDER_URL.to_string(), DetailMedia::Unavailable),
    };

    CardDescriptor {
        title: record.title.clone(),
        date_label: format_date_label(&record.date),
        explanation: record.explanation.clone(),
        thumbnail,
        detail,
    }
}
