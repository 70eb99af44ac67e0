use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer};

/// Reads either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp.
///
/// Timestamps keep the calendar date of their own offset, so
/// `2024-01-15T00:00:00.000Z` is the 15th.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|timestamp| timestamp.date_naive()))
        .map_err(|_| {
            format!(
                "Could not read {:?} as a date: expected YYYY-MM-DD or an RFC 3339 timestamp",
                raw
            )
        })
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(de::Error::custom)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_calendar_date(&raw))
        .transpose()
        .map_err(de::Error::custom)
}
