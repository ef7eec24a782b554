use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Whether a feed timestamp falls on the given UTC date.
///
/// Unparsable timestamps are never included.
pub fn is_on_date(commence_time: &str, date: NaiveDate) -> bool {
    parse_commence_time(commence_time)
        .map(|dt| dt.date_naive() == date)
        .unwrap_or(false)
}

fn parse_commence_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
