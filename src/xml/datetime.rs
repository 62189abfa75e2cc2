//! Codec for optional RFC 3339 timestamps such as `MessageCreatedDateTime`.
//!
//! `None` means "absent": the element is omitted on output (pair with
//! `skip_serializing_if = "Option::is_none"`) and an absent or empty element
//! decodes back to `None` instead of failing.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Deserializer, Serializer};

/// Serde `with` module for `Option<DateTime<FixedOffset>>`
pub mod rfc3339_opt {
    use super::*;

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date_time) => serializer.serialize_str(&format_rfc3339(date_time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Seconds precision, `Z` for UTC, numeric offset otherwise
pub fn format_rfc3339(date_time: &DateTime<FixedOffset>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
