//! Wire format for instance timestamps.
//!
//! Timestamps are naive local date-times: no offset is carried, and the
//! producer and the consumer are assumed to share the same clock
//! convention. Callers must not read them as UTC.
//!
//! Used as `#[serde(with = "crate::models::timestamp")]` on `NaiveDateTime`
//! fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, always six fractional digits.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn to_wire(dt: &NaiveDateTime) -> String {
    dt.format(WIRE_FORMAT).to_string()
}

pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_wire(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(serde::de::Error::custom)
}
