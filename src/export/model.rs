// src/export/model.rs

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// One instance joined with the name of its owning task, as stored.
///
/// `start` and `end` are kept as the raw strings found in the store; they
/// are only parsed by the calendar transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedInstanceRow {
    pub instance_id: i64,
    pub task_id: i64,
    pub start: String,
    pub end: String,
    pub task_name: String,
}

/// Header of the calendar CSV, in column order.
pub const CALENDAR_HEADERS: [&str; 5] =
    ["Subject", "Start Date", "Start Time", "End Date", "End Time"];

/// Calendar-ready projection of one instance.
///
/// An instance crossing midnight stays a single row, with different start
/// and end dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRow {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Start Date", serialize_with = "iso_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "Start Time", serialize_with = "iso_time")]
    pub start_time: NaiveTime,
    #[serde(rename = "End Date", serialize_with = "iso_date")]
    pub end_date: NaiveDate,
    #[serde(rename = "End Time", serialize_with = "iso_time")]
    pub end_time: NaiveTime,
}

/// `YYYY-MM-DD`
fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `HH:MM:SS`, with `.ffffff` appended only when there are microseconds.
fn format_time(t: &NaiveTime) -> String {
    if t.nanosecond() / 1_000 == 0 {
        t.format("%H:%M:%S").to_string()
    } else {
        t.format("%H:%M:%S%.6f").to_string()
    }
}

fn iso_date<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_date(d))
}

fn iso_time<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_time(t))
}
