//! Time-window arithmetic for dashboard aggregation.

use chrono::{DateTime, Duration, Local, TimeZone};

use crate::types::Timestamp;

/// Compute today's window `[local midnight, local midnight + 24h)` as UTC
/// instants, anchored to the given local wall-clock time.
///
/// The window is always exactly 24 hours even on DST-shift days; if local
/// midnight does not exist (spring-forward gap), the given instant is used
/// as the lower bound.
pub fn today_window(now: DateTime<Local>) -> (Timestamp, Timestamp) {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid wall-clock time");
    let start = Local
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or(now)
        .with_timezone(&chrono::Utc);
    (start, start + Duration::hours(24))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn window_spans_exactly_24_hours() {
        let (start, end) = today_window(Local::now());
        assert_eq!(end - start, Duration::hours(24));
    }

    #[test]
    fn window_starts_at_or_before_now() {
        let now = Local::now();
        let (start, _) = today_window(now);
        assert!(start <= now.with_timezone(&Utc));
    }

    #[test]
    fn window_start_is_local_midnight() {
        use chrono::Timelike;
        let now = Local::now();
        let (start, _) = today_window(now);
        let local_start = start.with_timezone(&Local);
        assert_eq!(local_start.hour(), 0);
        assert_eq!(local_start.minute(), 0);
        assert_eq!(local_start.second(), 0);
    }
}
