use chrono::NaiveDate;

use crate::record::{DayRecord, ISO_DATE_FMT};

/// Fixed width of the gallery window.
pub const WINDOW_SIZE: usize = 9;

/// Pick the `window` most recent records at or before `reference`.
///
/// The input collection carries no ordering guarantee, so the sort runs on
/// every call. The sort is stable: records sharing a date keep their original
/// relative order. Record dates are validated ISO text at the source
/// boundary, so lexicographic comparison is chronological comparison.
pub fn select(records: &[DayRecord], reference: NaiveDate, window: usize) -> Vec<DayRecord> {
    let anchor = reference.format(ISO_DATE_FMT).to_string();
    let mut picked: Vec<DayRecord> = records
        .iter()
        .filter(|r| r.date.as_str() <= anchor.as_str())
        .cloned()
        .collect();
    picked.sort_by(|a, b| b.date.cmp(&a.date));
    picked.truncate(window);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MediaType;

    fn record(date: &str, title: &str) -> DayRecord {
        DayRecord {
            date: date.to_string(),
            title: title.to_string(),
            explanation: String::new(),
            media_type: MediaType::Image,
            url: format!("https://example.com/{date}.jpg"),
            hdurl: None,
            thumbnail_url: None,
        }
    }

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, ISO_DATE_FMT).unwrap()
    }

    fn january(days: std::ops::RangeInclusive<u32>) -> Vec<DayRecord> {
        days.map(|d| record(&format!("2024-01-{d:02}"), &format!("Day {d}")))
            .collect()
    }

    // ==========================================================================
    // Window contract
    // ==========================================================================

    #[test]
    fn test_select_caps_at_window_size() {
        let records = january(1..=20);
        let picked = select(&records, date("2024-01-20"), WINDOW_SIZE);
        assert_eq!(picked.len(), WINDOW_SIZE);
    }

    #[test]
    fn test_select_excludes_future_dates() {
        let records = january(1..=20);
        let picked = select(&records, date("2024-01-10"), WINDOW_SIZE);
        assert!(picked.iter().all(|r| r.date.as_str() <= "2024-01-10"));
    }

    #[test]
    fn test_select_sorts_newest_first() {
        // Deliberately shuffled input: the source makes no ordering promise.
        let mut records = january(1..=12);
        records.swap(0, 11);
        records.swap(3, 7);
        let picked = select(&records, date("2024-01-12"), WINDOW_SIZE);
        let dates: Vec<&str> = picked.iter().map(|r| r.date.as_str()).collect();
        let mut expected = dates.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(dates, expected);
        assert_eq!(picked[0].date, "2024-01-12");
    }

    #[test]
    fn test_select_empty_when_all_records_later() {
        let records = january(10..=20);
        let picked = select(&records, date("2024-01-05"), WINDOW_SIZE);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_select_no_padding_below_window_size() {
        for qualifying in 1..=8usize {
            let records = january(1..=qualifying as u32);
            let picked = select(&records, date("2024-01-31"), WINDOW_SIZE);
            assert_eq!(picked.len(), qualifying, "must return all {qualifying}, unpadded");
        }
    }

    #[test]
    fn test_select_stable_on_duplicate_dates() {
        // Intra-day duplicates never occur upstream by construction, but the
        // window must keep their arrival order rather than crash or reorder.
        let records = vec![
            record("2024-01-02", "first of the pair"),
            record("2024-01-02", "second of the pair"),
            record("2024-01-01", "older"),
        ];
        let picked = select(&records, date("2024-01-02"), WINDOW_SIZE);
        assert_eq!(picked[0].title, "first of the pair");
        assert_eq!(picked[1].title, "second of the pair");
        assert_eq!(picked[2].title, "older");
    }

    #[test]
    fn test_select_deterministic_and_idempotent() {
        let mut records = january(1..=15);
        records.reverse();
        let first = select(&records, date("2024-01-09"), WINDOW_SIZE);
        let second = select(&records, date("2024-01-09"), WINDOW_SIZE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_ten_records_reference_mid_month() {
        // Ten entries dated 2024-01-01 through 2024-01-10, anchored at the
        // 7th: exactly the seven qualifying entries come back, newest first.
        let records = january(1..=10);
        let picked = select(&records, date("2024-01-07"), WINDOW_SIZE);
        assert_eq!(picked.len(), 7);
        assert_eq!(picked.first().unwrap().date, "2024-01-07");
        assert_eq!(picked.last().unwrap().date, "2024-01-01");
    }

    #[test]
    fn test_select_reference_on_exact_boundary() {
        let records = january(1..=9);
        let picked = select(&records, date("2024-01-09"), WINDOW_SIZE);
        assert_eq!(picked.len(), 9, "a record dated exactly at the reference qualifies");
    }
}
