use chrono::{DateTime, Duration, Utc};

/// Query window handed to the Jaeger search endpoint.
///
/// Jaeger takes `start` and `end` as microseconds since the Unix epoch,
/// so both bounds are scaled once here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_us: i64,
    pub end_us: i64,
}

impl TimeWindow {
    /// Half-open window ending at `now`, reaching back `gap`.
    pub fn ending_at(now: DateTime<Utc>, gap: Duration) -> Self {
        Self {
            start_us: (now - gap).timestamp_micros(),
            end_us: now.timestamp_micros(),
        }
    }

    /// Window covering the last `gap` hours.
    pub fn last_hours(gap: i64) -> Self {
        Self::ending_at(Utc::now(), Duration::hours(gap))
    }

    /// Window covering the last `gap` minutes.
    pub fn last_minutes(gap: i64) -> Self {
        Self::ending_at(Utc::now(), Duration::minutes(gap))
    }
}
