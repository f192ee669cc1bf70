// The two "today" clocks, kept deliberately distinct.
//
// Eligibility and forgotten-date queries run on the schedule's reference
// date (US Eastern, NBA-aligned). The import recency filter runs on the
// user's wall-clock date. Unifying them would silently change import
// behavior near midnight, so each caller names the clock it wants.

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::America::New_York;

/// Today's date in the schedule's reference timezone (US Eastern).
pub fn schedule_reference_date() -> NaiveDate {
    schedule_reference_date_at(Utc::now())
}

/// The schedule reference date for an arbitrary instant.
pub fn schedule_reference_date_at(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&New_York).date_naive()
}

/// Today's date on the user's local wall clock.
pub fn wall_clock_date() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn late_utc_evening_is_previous_eastern_day() {
        // 03:00 UTC is 22:00 or 23:00 the previous day in New York.
        assert_eq!(
            schedule_reference_date_at(instant("2025-01-15T03:00:00Z")),
            "2025-01-14".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn utc_afternoon_matches_eastern_day() {
        assert_eq!(
            schedule_reference_date_at(instant("2025-01-15T18:00:00Z")),
            "2025-01-15".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn dst_offset_is_respected() {
        // July: Eastern is UTC-4, so 03:30 UTC is still the previous day.
        assert_eq!(
            schedule_reference_date_at(instant("2025-07-10T03:30:00Z")),
            "2025-07-09".parse::<NaiveDate>().unwrap()
        );
        // 04:30 UTC crosses into the next Eastern day.
        assert_eq!(
            schedule_reference_date_at(instant("2025-07-10T04:30:00Z")),
            "2025-07-10".parse::<NaiveDate>().unwrap()
        );
    }
}
