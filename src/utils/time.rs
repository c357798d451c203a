use crate::error::{calendar_error, DigestResult};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Current calendar date in the given timezone
pub fn today_in(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Next calendar day, rolling over months and years
pub fn next_day(date: NaiveDate) -> DigestResult<NaiveDate> {
    date.succ_opt().ok_or_else(|| calendar_error("Date out of range"))
}

/// Tomorrow's date in the given timezone
pub fn tomorrow_in(now: DateTime<Utc>, tz: Tz) -> DigestResult<NaiveDate> {
    next_day(today_in(now, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn next_day_rolls_over_year_end() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            next_day(date).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn next_day_handles_leap_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(
            next_day(date).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn tomorrow_depends_on_timezone() {
        // 22:30 UTC is already the next day in Jerusalem
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 22, 30, 0).unwrap();
        assert_eq!(
            tomorrow_in(now, Tz::UTC).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()
        );
        assert_eq!(
            tomorrow_in(now, chrono_tz::Asia::Jerusalem).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
        );
    }

    #[test]
    fn next_day_fails_at_the_end_of_time() {
        assert!(next_day(NaiveDate::MAX).is_err());
    }
}
