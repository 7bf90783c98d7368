// Release line shown in the tag row when the item isn't completed,
// e.g. "Today • 14 mins" or "Oct 4, 2019 • 2 hrs, 48 mins".

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::localization::{translate, translate_counts};

pub fn released_at_date_time_string(
    released_at: DateTime<Utc>,
    duration_secs: u32,
    today: NaiveDate,
) -> String {
    let date = card_date(released_at.date_naive(), today);
    let duration = duration_string(duration_secs);
    if duration.is_empty() {
        date
    } else {
        format!("{date} • {duration}")
    }
}

fn card_date(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        translate("date-today")
    } else if day.year() == today.year() {
        day.format("%b %-d").to_string()
    } else {
        day.format("%b %-d, %Y").to_string()
    }
}

/// Empty for zero-length items.
pub fn duration_string(secs: u32) -> String {
    let total_minutes = u64::from(secs) / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    match (hours, minutes) {
        (0, 0) if secs == 0 => String::new(),
        // Under a minute still reads as one
        (0, 0) => translate_counts("duration-minutes", &[("minutes", 1)]),
        (0, m) => translate_counts("duration-minutes", &[("minutes", m)]),
        (h, 0) => translate_counts("duration-hours", &[("hours", h)]),
        (h, m) => translate_counts("duration-hours-minutes", &[("hours", h), ("minutes", m)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn durations() {
        assert_eq!(duration_string(0), "");
        assert_eq!(duration_string(30), "1 min");
        assert_eq!(duration_string(14 * 60 + 59), "14 mins");
        assert_eq!(duration_string(3600), "1 hr");
        assert_eq!(duration_string(10080), "2 hrs, 48 mins");
    }

    #[test]
    fn today_same_year_and_older() {
        let released = Utc.with_ymd_and_hms(2019, 10, 4, 15, 30, 0).unwrap();
        assert_eq!(
            released_at_date_time_string(released, 840, day(2019, 10, 4)),
            "Today • 14 mins"
        );
        assert_eq!(
            released_at_date_time_string(released, 840, day(2019, 12, 1)),
            "Oct 4 • 14 mins"
        );
        assert_eq!(
            released_at_date_time_string(released, 10080, day(2020, 1, 2)),
            "Oct 4, 2019 • 2 hrs, 48 mins"
        );
    }

    #[test]
    fn zero_duration_shows_only_date() {
        let released = Utc.with_ymd_and_hms(2021, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(
            released_at_date_time_string(released, 0, day(2021, 6, 1)),
            "Mar 9"
        );
    }
}
