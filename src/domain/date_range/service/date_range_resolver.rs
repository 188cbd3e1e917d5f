//! Maps between a concrete [`DateRangeFilter`] and the preset a picker shows.
//!
//! Presets such as "Last Hour" are materialized relative to the moment they
//! are built, so their instants never equal a filter built a few seconds
//! later. Matching therefore works with tolerance windows:
//!
//! * an upper bound counts as "now" when it is within [`NOW_TOLERANCE_SECS`];
//! * two lower (or upper) bounds are the same instant when they are within
//!   [`INSTANT_TOLERANCE_SECS`].
//!
//! Both constants are empirical and may be tuned.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::clock::Clock;
use crate::domain::date_range::model::{DatePeriod, DatePreset, DateRangeFilter, Granularity};

pub const NOW_TOLERANCE_SECS: i64 = 60;
pub const INSTANT_TOLERANCE_SECS: i64 = 2;

/// Result of clicking a preset: the filter to propagate plus the preset's
/// granularity as a suggestion the caller may override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPreset {
    pub filter: DateRangeFilter,
    pub granularity: Granularity,
}

#[derive(Clone)]
pub struct DateRangeResolver {
    clock: Arc<dyn Clock>,
}

impl DateRangeResolver {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn filter_to_period(&self, filter: Option<&DateRangeFilter>) -> DatePeriod {
        filter_to_period(filter, self.clock.now())
    }

    /// Returns the preset that best describes `filter`, or a synthesized
    /// custom preset when nothing in `presets` matches.
    pub fn find_matching_preset(
        &self,
        filter: Option<&DateRangeFilter>,
        presets: &[DatePreset],
    ) -> DatePreset {
        let now = self.clock.now();

        let Some(filter) = filter else {
            return presets
                .first()
                .cloned()
                .unwrap_or_else(|| DatePreset::custom(DatePeriod::new(None, Some(now))));
        };

        let period = filter_to_period(Some(filter), now);

        if let Some(preset) = find_relative_match(&period, presets, now) {
            debug!(alias = %preset.alias, "Matched preset relative to now");
            return preset.clone();
        }

        if let Some(preset) = find_exact_match(&period, presets) {
            debug!(alias = %preset.alias, "Matched preset by exact period");
            return preset.clone();
        }

        debug!(?period, "No preset matches, using custom range");
        DatePreset::custom(period)
    }

    pub fn apply_preset(&self, preset: &DatePreset) -> AppliedPreset {
        apply_preset(preset)
    }
}

/// `since = gte ?? gt`, `until = lte ?? lt ?? now`.
pub fn filter_to_period(filter: Option<&DateRangeFilter>, now: DateTime<Utc>) -> DatePeriod {
    match filter {
        Some(filter) => DatePeriod::new(
            filter.lower_bound(),
            Some(filter.upper_bound().unwrap_or(now)),
        ),
        None => DatePeriod::new(None, Some(now)),
    }
}

pub fn apply_preset(preset: &DatePreset) -> AppliedPreset {
    AppliedPreset {
        filter: DateRangeFilter::inclusive(preset.period.since, preset.period.until),
        granularity: preset.granularity,
    }
}

fn within(a: DateTime<Utc>, b: DateTime<Utc>, secs: i64) -> bool {
    (a - b).num_milliseconds().abs() < secs * 1000
}

fn find_relative_match<'a>(
    period: &DatePeriod,
    presets: &'a [DatePreset],
    now: DateTime<Utc>,
) -> Option<&'a DatePreset> {
    let ends_now = period
        .until
        .map_or(true, |until| within(until, now, NOW_TOLERANCE_SECS));
    if !ends_now {
        return None;
    }

    let since = period.since?;
    presets.iter().find(|preset| {
        preset
            .period
            .since
            .is_some_and(|preset_since| within(preset_since, since, INSTANT_TOLERANCE_SECS))
    })
}

fn find_exact_match<'a>(period: &DatePeriod, presets: &'a [DatePreset]) -> Option<&'a DatePreset> {
    presets.iter().find(|preset| match (preset.period.since, period.since) {
        (None, None) => true,
        (Some(preset_since), Some(since)) => {
            within(preset_since, since, INSTANT_TOLERANCE_SECS)
                && matches!(
                    (preset.period.until, period.until),
                    (Some(preset_until), Some(until)) if within(preset_until, until, INSTANT_TOLERANCE_SECS)
                )
        }
        _ => false,
    })
}
