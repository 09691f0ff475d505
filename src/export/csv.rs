use crate::errors::AppResult;
use crate::export::model::{CALENDAR_HEADERS, CalendarRow};
use csv::WriterBuilder;
use std::io::Write;

/// Scrive le righe calendario in CSV; l'header viene scritto anche senza righe.
pub fn write_calendar<W: Write>(out: W, rows: &[CalendarRow]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);

    wtr.write_record(CALENDAR_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn header_only_when_empty() {
        let mut buf = Vec::new();
        write_calendar(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Subject,Start Date,Start Time,End Date,End Time\n"
        );
    }

    #[test]
    fn quotes_only_when_needed() {
        let row = CalendarRow {
            subject: "Read, then nap".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 8, 16).unwrap(),
            start_time: NaiveTime::from_hms_opt(12, 30, 22).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 8, 17).unwrap(),
            end_time: NaiveTime::from_hms_opt(14, 2, 2).unwrap(),
        };

        let mut buf = Vec::new();
        write_calendar(&mut buf, &[row]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text.lines().nth(1),
            Some("\"Read, then nap\",2020-08-16,12:30:22,2020-08-17,14:02:02")
        );
    }
}
