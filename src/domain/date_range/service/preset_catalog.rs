//! Built-in preset definitions.

use chrono::{DateTime, Duration, Utc};

use crate::domain::date_range::model::preset_definition::materialize_all;
use crate::domain::date_range::model::{DatePreset, Granularity, PresetAnchor, PresetDefinition};

/// "Last N" presets, narrowest first. List order is the match priority.
pub fn default_preset_definitions() -> Vec<PresetDefinition> {
    vec![
        PresetDefinition::relative(1, "Last 15 Minutes", "last_15_minutes", Duration::minutes(15), Granularity::Minute),
        PresetDefinition::relative(2, "Last 30 Minutes", "last_30_minutes", Duration::minutes(30), Granularity::Minute),
        PresetDefinition::relative(3, "Last Hour", "last_hour", Duration::hours(1), Granularity::Minute),
        PresetDefinition::relative(4, "Last 3 Hours", "last_3_hours", Duration::hours(3), Granularity::Hour),
        PresetDefinition::relative(5, "Last 12 Hours", "last_12_hours", Duration::hours(12), Granularity::Hour),
        PresetDefinition::relative(6, "Last 24 Hours", "last_24_hours", Duration::hours(24), Granularity::Hour),
        PresetDefinition::relative(7, "Last 7 Days", "last_7_days", Duration::days(7), Granularity::Day),
        PresetDefinition::relative(8, "Last 30 Days", "last_30_days", Duration::days(30), Granularity::Day),
        PresetDefinition {
            id: Some(9),
            title: "All Time".to_string(),
            alias: "all_time".to_string(),
            anchor: PresetAnchor::AllTime,
            granularity: Granularity::Month,
        },
    ]
}

/// Day-aligned presets used by the calendar style picker.
pub fn calendar_preset_definitions() -> Vec<PresetDefinition> {
    let calendar = |id, title: &str, alias: &str, since, until, granularity| PresetDefinition {
        id: Some(id),
        title: title.to_string(),
        alias: alias.to_string(),
        anchor: PresetAnchor::CalendarDays {
            since_days_ago: since,
            until_days_ago: until,
        },
        granularity,
    };

    vec![
        calendar(1, "Today", "today", 0, 0, Granularity::Hour),
        calendar(2, "Yesterday", "yesterday", 1, 1, Granularity::Hour),
        calendar(3, "Last 7 days", "last7days", 7, 1, Granularity::Day),
    ]
}

pub fn default_presets(now: DateTime<Utc>) -> Vec<DatePreset> {
    materialize_all(&default_preset_definitions(), now)
}

pub fn calendar_presets(now: DateTime<Utc>) -> Vec<DatePreset> {
    materialize_all(&calendar_preset_definitions(), now)
}
