/// Utilities for the appointment date-and-time input
///
/// `datetime-local` inputs understand `YYYY-MM-DDTHH:MM`; the formatting is
/// kept separate from "now" so it can be tested at a known instant.
use chrono::{Local, NaiveDateTime};

/// Format a datetime for a `datetime-local` attribute, minute precision.
/// Example: 2026-03-05 09:07:41 -> "2026-03-05T09:07"
pub fn format_datetime_local(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Minimum selectable appointment moment: the current local time.
/// Keeps the picker from accepting a booking in the past.
pub fn min_appointment_datetime() -> String {
    format_datetime_local(Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn formats_minute_precision() {
        assert_eq!(
            format_datetime_local(at(2026, 8, 26, 14, 5, 59)),
            "2026-08-26T14:05"
        );
    }

    #[test]
    fn pads_month_day_hour_and_minute() {
        assert_eq!(
            format_datetime_local(at(2026, 1, 2, 3, 4, 0)),
            "2026-01-02T03:04"
        );
    }

    #[test]
    fn seconds_are_dropped_not_rounded() {
        // 23:59:59 must stay 23:59, never roll over to the next minute
        assert_eq!(
            format_datetime_local(at(2026, 12, 31, 23, 59, 59)),
            "2026-12-31T23:59"
        );
    }
}
