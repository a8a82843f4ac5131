//! Time and date calculation utilities.
//!
//! Used to decide when a cached network snapshot has to be downloaded again and to turn the
//! networks' session information into whole online minutes.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Whether a snapshot downloaded at `updated_at` is older than `interval_seconds`.
///
/// A snapshot exactly `interval_seconds` old is still fresh.
///
/// # Arguments
/// - `updated_at` - When the snapshot was last downloaded (UTC)
/// - `now` - Current UTC time
/// - `interval_seconds` - Maximum age before a refresh is needed
pub fn is_stale(updated_at: NaiveDateTime, now: NaiveDateTime, interval_seconds: i64) -> bool {
    now.signed_duration_since(updated_at) > Duration::seconds(interval_seconds)
}

/// Whole minutes between a VATSIM logon and `now`, truncated.
///
/// Clock skew between the network and us can put the logon slightly in the future, the
/// distance is used either way.
pub fn minutes_since(logon_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(logon_time).num_minutes().abs()
}

/// Online seconds reported by IVAO rounded up to whole minutes.
pub fn seconds_to_started_minutes(seconds: i64) -> i64 {
    let seconds = seconds.max(0);

    seconds / 60 + i64::from(seconds % 60 > 0)
}
