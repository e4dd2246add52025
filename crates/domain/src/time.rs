//! Time helpers.

use chrono::{DateTime, Datelike, FixedOffset, Utc, Weekday};

/// Pakistan Standard Time; no daylight saving.
const KARACHI_OFFSET_SECS: i32 = 5 * 3600;

/// Return the current UTC time.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Day of the week in Karachi at `instant`.
#[must_use]
pub fn karachi_weekday(instant: DateTime<Utc>) -> Weekday {
    FixedOffset::east_opt(KARACHI_OFFSET_SECS)
        .map_or_else(|| instant.weekday(), |tz| instant.with_timezone(&tz).weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_roll_over_to_friday_in_karachi_before_utc() {
        // Thursday 20:00 UTC is Friday 01:00 in Karachi.
        let instant = Utc.with_ymd_and_hms(2026, 10, 15, 20, 0, 0).unwrap();
        assert_eq!(instant.weekday(), Weekday::Thu);
        assert_eq!(karachi_weekday(instant), Weekday::Fri);
    }
}
