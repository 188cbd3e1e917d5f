use chrono::{DateTime, Duration, Utc};

use crate::domain::date_range::model::{DateRangeFilter, Granularity};

/// Suggests a granularity for a freshly committed absolute range.
///
/// Spans up to one hour suggest `minute`, up to a day suggest `hour`.
/// Anything wider, or a range without a lower bound, yields `None` and the
/// caller keeps whatever granularity it already had.
pub fn suggest_granularity(range: &DateRangeFilter, now: DateTime<Utc>) -> Option<Granularity> {
    let since = range.lower_bound()?;
    let until = range.upper_bound().unwrap_or(now);
    let span = until - since;

    if span <= Duration::hours(1) {
        Some(Granularity::Minute)
    } else if span <= Duration::hours(24) {
        Some(Granularity::Hour)
    } else {
        None
    }
}
