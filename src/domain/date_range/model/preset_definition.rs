use chrono::{DateTime, Days, Duration, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::warn;

use super::date_period::DatePeriod;
use super::date_preset::DatePreset;
use super::granularity::Granularity;

/// Longest accepted relative lookback (100 years).
pub const MAX_LOOKBACK_SECS: i64 = 100 * 366 * 24 * 3600;

/// Furthest accepted calendar offset (100 years).
pub const MAX_CALENDAR_DAYS_AGO: u32 = 100 * 366;

/// How a stored preset turns into a concrete period.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresetAnchor {
    /// `since = now - lookback`, open upper bound.
    Relative { lookback_secs: i64 },
    /// Whole UTC days counted back from today, both bounds at midnight.
    CalendarDays { since_days_ago: u32, until_days_ago: u32 },
    Fixed {
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    },
    AllTime,
}

/// Storable form of a [`DatePreset`].
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDefinition {
    pub id: Option<u32>,
    pub title: String,
    pub alias: String,
    pub anchor: PresetAnchor,
    pub granularity: Granularity,
}

impl PresetDefinition {
    pub fn relative(id: u32, title: &str, alias: &str, lookback: Duration, granularity: Granularity) -> Self {
        Self {
            id: Some(id),
            title: title.to_string(),
            alias: alias.to_string(),
            anchor: PresetAnchor::Relative {
                lookback_secs: lookback.num_seconds(),
            },
            granularity,
        }
    }

    /// `None` when the anchor falls outside the representable date range.
    pub fn materialize(&self, now: DateTime<Utc>) -> Option<DatePreset> {
        Some(DatePreset {
            id: self.id,
            title: self.title.clone(),
            alias: self.alias.clone(),
            period: self.anchor.period_at(now)?,
            granularity: self.granularity,
        })
    }
}

impl PresetAnchor {
    pub fn period_at(&self, now: DateTime<Utc>) -> Option<DatePeriod> {
        let period = match self {
            Self::Relative { lookback_secs } => {
                let since = TimeDelta::try_seconds(*lookback_secs).and_then(|d| now.checked_sub_signed(d))?;
                DatePeriod::new(Some(since), None)
            }
            Self::CalendarDays {
                since_days_ago,
                until_days_ago,
            } => DatePeriod::new(
                Some(midnight_days_ago(now, *since_days_ago)?),
                Some(midnight_days_ago(now, *until_days_ago)?),
            ),
            Self::Fixed { since, until } => DatePeriod::new(*since, *until),
            Self::AllTime => DatePeriod::all_time(),
        };
        Some(period)
    }
}

fn midnight_days_ago(now: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
    now.date_naive()
        .checked_sub_days(Days::new(u64::from(days)))
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Materializes a definition list against one anchor instant. Definitions
/// whose anchor cannot be placed on the timeline are skipped.
pub fn materialize_all(definitions: &[PresetDefinition], now: DateTime<Utc>) -> Vec<DatePreset> {
    definitions
        .iter()
        .filter_map(|d| {
            let preset = d.materialize(now);
            if preset.is_none() {
                warn!(alias = %d.alias, anchor = ?d.anchor, "Preset anchor out of range, skipping");
            }
            preset
        })
        .collect()
}
