// src/export/transform.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CalendarRow, JoinedInstanceRow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Layouts a stored date-time may have.
/// `%.f` also accepts a missing fractional part.
const STORED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Same layouts with a trailing UTC offset; the offset is dropped and the
/// wall-clock time kept.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Parse a date-time as found in the store.
///
/// A bare `YYYY-MM-DD` is read as midnight of that day.
pub fn parse_stored(field: &'static str, raw: &str) -> AppResult<NaiveDateTime> {
    let value = raw.trim();
    STORED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| AppError::InvalidTimestamp {
            field,
            value: raw.to_string(),
        })
}

/// Project one joined row onto a calendar row.
pub fn to_calendar_row(row: &JoinedInstanceRow) -> AppResult<CalendarRow> {
    let start = parse_stored("start", &row.start)?;
    let end = parse_stored("end", &row.end)?;

    Ok(CalendarRow {
        subject: row.task_name.clone(),
        start_date: start.date(),
        start_time: start.time(),
        end_date: end.date(),
        end_time: end.time(),
    })
}

/// Transform every row, or fail on the first one that cannot be parsed.
pub fn to_calendar_rows(rows: &[JoinedInstanceRow]) -> AppResult<Vec<CalendarRow>> {
    rows.iter()
        .map(|row| {
            to_calendar_row(row).inspect_err(|e| {
                tracing::error!(instance_id = row.instance_id, "cannot convert row: {e}");
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::csv::write_calendar;

    fn row(name: &str, start: &str, end: &str) -> JoinedInstanceRow {
        JoinedInstanceRow {
            instance_id: 1,
            task_id: 1,
            start: start.into(),
            end: end.into(),
            task_name: name.into(),
        }
    }

    /// The data line `write_calendar` emits for one row.
    fn csv_line(row: &CalendarRow) -> String {
        let mut buf = Vec::new();
        write_calendar(&mut buf, std::slice::from_ref(row)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        text.lines().nth(1).unwrap().to_string()
    }

    #[test]
    fn midnight_crossing_instance_stays_one_row() {
        let out = to_calendar_row(&row(
            "Exercise",
            "2020-08-21T01:30:22",
            "2020-08-22T14:02:02",
        ))
        .unwrap();

        assert_eq!(csv_line(&out), "Exercise,2020-08-21,01:30:22,2020-08-22,14:02:02");
    }

    #[test]
    fn accepts_wire_and_space_separated_forms() {
        let out = to_calendar_row(&row(
            "Sleep",
            "2020-08-22T07:30:22.000000",
            "2020-08-22 08:02:02.250000",
        ))
        .unwrap();

        assert_eq!(
            csv_line(&out),
            "Sleep,2020-08-22,07:30:22,2020-08-22,08:02:02.250000"
        );
    }

    #[test]
    fn date_only_value_is_midnight() {
        let out = to_calendar_row(&row("Misc", "2020-08-21", "2020-08-22")).unwrap();

        assert_eq!(out.start_date, NaiveDate::from_ymd_opt(2020, 8, 21).unwrap());
        assert_eq!(out.start_time, NaiveTime::MIN);
        assert_eq!(csv_line(&out), "Misc,2020-08-21,00:00:00,2020-08-22,00:00:00");
    }

    #[test]
    fn offset_is_dropped_keeping_wall_clock() {
        let out = to_calendar_row(&row(
            "Exercise",
            "2020-08-21T01:30:22+00:00",
            "2020-08-22 14:02:02.500000+02:00",
        ))
        .unwrap();

        assert_eq!(
            csv_line(&out),
            "Exercise,2020-08-21,01:30:22,2020-08-22,14:02:02.500000"
        );
    }

    #[test]
    fn malformed_end_is_rejected() {
        let err = to_calendar_row(&row("Work", "2020-08-20T10:30:22", "yesterday")).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp { field: "end", .. }));
    }

    #[test]
    fn one_bad_row_fails_the_batch() {
        let rows = vec![
            row("Work", "2020-08-20T10:30:22", "2020-08-21T14:02:02"),
            row("Work", "2020-13-40T10:30:22", "2020-08-21T14:02:02"),
        ];
        assert!(to_calendar_rows(&rows).is_err());
    }
}
