use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// `since` absent means unbounded past, `until` absent means "now" once consumed.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl DatePeriod {
    pub fn new(since: Option<DateTime<Utc>>, until: Option<DateTime<Utc>>) -> Self {
        Self { since, until }
    }

    /// Single instant range, used when an edit would invert the period.
    pub fn collapsed(at: DateTime<Utc>) -> Self {
        Self {
            since: Some(at),
            until: Some(at),
        }
    }

    pub fn all_time() -> Self {
        Self::default()
    }
}
