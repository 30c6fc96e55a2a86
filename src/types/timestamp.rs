//! tzKT timestamp wire format.
//!
//! Timestamps are UTC ISO-8601 strings, either `2021-03-04T05:06:07Z` or with a fractional
//! second part. Use [`option`] with `#[serde(default, with = "...")]` on
//! `Option<DateTime<Utc>>` fields so absent and `null` values become `None`.

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};

pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DATETIME_MS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parses a timestamp in either wire format.
pub fn parse(text: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, DATETIME_MS_FORMAT))
        .map(|naive| naive.and_utc())
}

/// Formats a timestamp with second precision.
pub fn format(value: &DateTime<Utc>) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| super::parse(&text).map_err(serde::de::Error::custom))
            .transpose()
    }
}
