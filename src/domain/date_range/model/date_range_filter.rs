use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Bounds sent to analytics queries.
///
/// At most one lower bound (`gt` or `gte`) and one upper bound (`lt` or `lte`)
/// is meaningful. Everything produced by this crate uses `gte`/`lte` only.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFilter {
    pub gt: Option<DateTime<Utc>>,
    pub gte: Option<DateTime<Utc>>,
    pub lt: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

impl DateRangeFilter {
    /// Inclusive range, the only shape the resolver emits.
    pub fn inclusive(gte: Option<DateTime<Utc>>, lte: Option<DateTime<Utc>>) -> Self {
        Self {
            gt: None,
            gte,
            lt: None,
            lte,
        }
    }

    /// Lower bound, preferring the inclusive one.
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.gte.or(self.gt)
    }

    /// Upper bound, preferring the inclusive one.
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.lte.or(self.lt)
    }
}
