//! Per-session visit counter and last-visit date

use chrono::{Local, NaiveDateTime};

use crate::{
    error::AppResult,
    models::visit::{VisitState, COUNT_ATTRIBUTE, DATE_ATTRIBUTE},
    services::sessions::Session,
};

/// `dd/M/yyyy hh:mm:ss`: 12-hour clock with no AM/PM marker, so afternoon
/// times are indistinguishable from morning ones.
pub const DATE_PATTERN: &str = "%d/%-m/%Y %I:%M:%S";

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub fn format_visit_date(at: NaiveDateTime) -> String {
    at.format(DATE_PATTERN).to_string()
}

/// Reads visit state before a page is rendered and records the visit after
pub struct VisitTracker;

impl VisitTracker {
    /// Visit state to display. A missing or mistyped counter reads as 0, a missing
    /// date as `now`.
    pub fn read(session: &Session, now: NaiveDateTime) -> VisitState {
        VisitState {
            count: session.get::<i64>(COUNT_ATTRIBUTE).unwrap_or(0),
            date: session
                .get::<String>(DATE_ATTRIBUTE)
                .unwrap_or_else(|| format_visit_date(now)),
        }
    }

    /// Store `shown.count + 1` and `now`, overwriting whatever was read
    pub fn record(session: &mut Session, shown: &VisitState, now: NaiveDateTime) -> AppResult<()> {
        session.set(COUNT_ATTRIBUTE, shown.count + 1)?;
        session.set(DATE_ATTRIBUTE, format_visit_date(now))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_format_morning() {
        assert_eq!(format_visit_date(at(9, 15, 30)), "05/3/2024 09:15:30");
    }

    #[test]
    fn test_format_afternoon_has_no_day_period() {
        assert_eq!(format_visit_date(at(21, 15, 30)), "05/3/2024 09:15:30");
    }

    #[test]
    fn test_format_two_digit_month_and_midnight() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 25)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert_eq!(format_visit_date(date), "25/12/2023 12:05:00");
    }

    #[test]
    fn test_first_visit_defaults() {
        let session = Session::new();
        let state = VisitTracker::read(&session, at(9, 15, 30));
        assert_eq!(
            state,
            VisitState {
                count: 0,
                date: "05/3/2024 09:15:30".to_string(),
            }
        );
    }

    #[test]
    fn test_record_increments_shown_count_and_overwrites_date() {
        let mut session = Session::new();
        session.set(COUNT_ATTRIBUTE, 6_i64).unwrap();
        session.set(DATE_ATTRIBUTE, "01/1/2020 01:00:00").unwrap();

        let shown = VisitTracker::read(&session, at(9, 0, 0));
        assert_eq!(shown.count, 6);
        assert_eq!(shown.date, "01/1/2020 01:00:00");

        VisitTracker::record(&mut session, &shown, at(10, 30, 0)).unwrap();
        let next = VisitTracker::read(&session, at(11, 0, 0));
        assert_eq!(next.count, 7);
        assert_eq!(next.date, "05/3/2024 10:30:00");
    }

    #[test]
    fn test_mistyped_counter_reads_as_zero() {
        let mut session = Session::new();
        session.set(COUNT_ATTRIBUTE, "many").unwrap();
        assert_eq!(VisitTracker::read(&session, at(9, 0, 0)).count, 0);
    }
}
