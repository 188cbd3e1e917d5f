use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::date_range::model::{DatePeriod, DateRangeFilter};

use super::date_input::{format_date_input, parse_date_input};

/// Raw text currently shown in the since/until fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInputs {
    pub since: String,
    pub until: String,
}

/// Outcome of one keystroke in a date field.
///
/// `period` is always a valid, non-inverted period. `committed` tells whether
/// the text was a complete date and changed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateEdit {
    pub period: DatePeriod,
    pub committed: bool,
}

/// Free text entry for a custom range.
///
/// Text is always accepted into the field; only valid dates are committed
/// to the period. A since after the current until (or an until before the
/// current since) collapses the period to that single day.
#[derive(Debug, Clone, Default)]
pub struct CustomRangeEditor {
    inputs: DateInputs,
    period: DatePeriod,
}

impl CustomRangeEditor {
    pub fn new(period: DatePeriod) -> Self {
        let mut editor = Self {
            inputs: DateInputs::default(),
            period,
        };
        editor.sync_inputs();
        editor
    }

    pub fn inputs(&self) -> &DateInputs {
        &self.inputs
    }

    pub fn period(&self) -> DatePeriod {
        self.period
    }

    pub fn to_filter(&self) -> DateRangeFilter {
        DateRangeFilter::inclusive(self.period.since, self.period.until)
    }

    /// Replaces the period from outside (preset click, calendar drag) and
    /// rewrites both text fields to match it.
    pub fn set_period(&mut self, period: DatePeriod) {
        self.period = period;
        self.sync_inputs();
    }

    pub fn edit_since(&mut self, value: &str) -> DateEdit {
        self.inputs.since = value.to_string();

        let Some(new_since) = parse_date_input(value) else {
            trace!(value, "Since input not a complete date yet");
            return self.pending();
        };

        self.period = match self.period.until {
            Some(until) if new_since <= until => DatePeriod::new(Some(new_since), Some(until)),
            _ => DatePeriod::collapsed(new_since),
        };
        self.committed()
    }

    pub fn edit_until(&mut self, value: &str) -> DateEdit {
        self.inputs.until = value.to_string();

        let Some(new_until) = parse_date_input(value) else {
            trace!(value, "Until input not a complete date yet");
            return self.pending();
        };

        self.period = match self.period.since {
            Some(since) if new_until >= since => DatePeriod::new(Some(since), Some(new_until)),
            _ => DatePeriod::collapsed(new_until),
        };
        self.committed()
    }

    fn sync_inputs(&mut self) {
        self.inputs = DateInputs {
            since: self.period.since.map(format_date_input).unwrap_or_default(),
            until: self.period.until.map(format_date_input).unwrap_or_default(),
        };
    }

    fn pending(&self) -> DateEdit {
        DateEdit {
            period: self.period,
            committed: false,
        }
    }

    fn committed(&self) -> DateEdit {
        DateEdit {
            period: self.period,
            committed: true,
        }
    }
}

/// Applies a since edit then an until edit on top of `current` and returns
/// the resulting inclusive filter.
pub fn apply_custom_range(current: DatePeriod, since_input: &str, until_input: &str) -> DateRangeFilter {
    let mut editor = CustomRangeEditor::new(current);
    editor.edit_since(since_input);
    editor.edit_until(until_input);
    editor.to_filter()
}
