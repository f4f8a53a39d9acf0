//! Timestamp parsing shared by the HTTP bodies and the seed file.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// RFC 3339, or a timestamp without offset which is taken as UTC.
pub fn parse_iso_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn parse_or_reject<E: serde::de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    parse_iso_datetime(raw).ok_or_else(|| E::custom(format!("invalid ISO 8601 datetime: {}", raw)))
}

pub fn iso_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_or_reject(&raw)
}

/// Like [`iso_datetime`], with `null` read as absent.
pub fn optional_iso_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_or_reject(&raw))
        .transpose()
}
