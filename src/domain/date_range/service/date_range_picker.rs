use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::date_range::model::{DatePeriod, DatePreset, DateRangeFilter, Granularity};

use super::custom_range_editor::{CustomRangeEditor, DateEdit, DateInputs};
use super::date_range_resolver::{apply_preset, DateRangeResolver};
use super::granularity_suggestion::suggest_granularity;

const LABEL_DATE_FORMAT: &str = "%a %b %d %Y";
const OPEN_LOWER_BOUND_LABEL: &str = "Any time";

/// What the picker hands to its owner when the user commits a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCommit {
    pub filter: DateRangeFilter,
    pub granularity: Granularity,
}

/// State behind one open date picker: selection, granularity and the text
/// fields. Lives as long as the popover.
pub struct DateRangePicker {
    resolver: DateRangeResolver,
    presets: Vec<DatePreset>,
    selected: DatePreset,
    granularity: Granularity,
    editor: CustomRangeEditor,
}

impl DateRangePicker {
    pub fn new(
        resolver: DateRangeResolver,
        presets: Vec<DatePreset>,
        value: Option<&DateRangeFilter>,
        granularity: Granularity,
    ) -> Self {
        let selected = resolver.find_matching_preset(value, &presets);
        let mut picker = Self {
            resolver,
            presets,
            selected: selected.clone(),
            granularity,
            editor: CustomRangeEditor::default(),
        };
        picker.select(selected);
        picker
    }

    pub fn presets(&self) -> &[DatePreset] {
        &self.presets
    }

    pub fn selected(&self) -> &DatePreset {
        &self.selected
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn inputs(&self) -> &DateInputs {
        self.editor.inputs()
    }

    /// Re-resolves the selection after the owner changed the value.
    pub fn sync(&mut self, value: Option<&DateRangeFilter>) -> &DatePreset {
        self.select(self.resolver.find_matching_preset(value, &self.presets));
        &self.selected
    }

    /// Applies a library preset. Unknown aliases leave the picker untouched.
    pub fn select_preset(&mut self, alias: &str) -> Option<RangeCommit> {
        let preset = self.presets.iter().find(|p| p.alias == alias)?.clone();
        let applied = apply_preset(&preset);

        self.granularity = applied.granularity;
        self.select(preset);

        Some(RangeCommit {
            filter: applied.filter,
            granularity: self.granularity,
        })
    }

    /// Commits an absolute range picked on the calendar.
    pub fn select_calendar_range(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> RangeCommit {
        self.commit(DateRangeFilter::inclusive(Some(start), Some(end)))
    }

    pub fn edit_since(&mut self, value: &str) -> DateEdit {
        self.editor.edit_since(value)
    }

    pub fn edit_until(&mut self, value: &str) -> DateEdit {
        self.editor.edit_until(value)
    }

    /// Commits whatever the text fields currently hold.
    pub fn apply(&mut self) -> RangeCommit {
        self.commit(self.editor.to_filter())
    }

    /// Button text: the preset title, or the dates for a custom range.
    pub fn label(&self) -> String {
        if !self.selected.is_custom() {
            return self.selected.title.clone();
        }

        let period = self.selected.period;
        let since = period
            .since
            .map(|d| d.format(LABEL_DATE_FORMAT).to_string())
            .unwrap_or_else(|| OPEN_LOWER_BOUND_LABEL.to_string());
        let until = period
            .until
            .unwrap_or_else(|| self.resolver.now())
            .format(LABEL_DATE_FORMAT)
            .to_string();

        format!("{since} - {until}")
    }

    fn commit(&mut self, filter: DateRangeFilter) -> RangeCommit {
        // Suggestion must reflect the range being committed, not the previous one.
        if let Some(suggested) = suggest_granularity(&filter, self.resolver.now()) {
            debug!(%suggested, "Granularity suggestion applied");
            self.granularity = suggested;
        }

        let matched = self.resolver.find_matching_preset(Some(&filter), &self.presets);
        self.select(matched);

        RangeCommit {
            filter,
            granularity: self.granularity,
        }
    }

    fn select(&mut self, preset: DatePreset) {
        let period = match preset.period {
            DatePeriod { until: None, since } => DatePeriod::new(since, Some(self.resolver.now())),
            period => period,
        };
        self.editor.set_period(period);
        self.selected = preset;
    }
}
