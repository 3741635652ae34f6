use chrono::{DateTime, Utc};

use crate::utils::days_between;

/// "Today", "1 day ago" or "N days ago" for the last refresh of a record.
pub fn format_days_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match days_between(then, now) {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        days => format!("{} days ago", days),
    }
}

/// Whether a record has gone more than `stale_after_days` without a refresh.
pub fn is_stale(then: DateTime<Utc>, now: DateTime<Utc>, stale_after_days: i64) -> bool {
    days_between(then, now) > stale_after_days
}
