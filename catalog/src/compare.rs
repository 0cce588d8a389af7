//! Side-by-side comparison helpers.

use crate::model::University;

/// Minimum number of compared records before the merit trend is shown.
pub const TREND_MIN_SELECTED: usize = 2;

/// One year of the merit trend across the compared records.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendRow {
    pub year: u16,
    /// One entry per compared record, index-aligned with the selection.
    pub merits: Vec<Option<f64>>,
}

/// Merit trend keyed on the first record's history years.
///
/// Each record contributes the point at the same index of its own history,
/// or `None` when its series is shorter. Empty when there is no first record
/// or it has no history.
#[must_use]
pub fn merit_trend(selected: &[&University]) -> Vec<TrendRow> {
    let Some(first) = selected.first() else {
        return Vec::new();
    };
    first
        .merit_history
        .iter()
        .enumerate()
        .map(|(i, point)| TrendRow {
            year: point.year,
            merits: selected.iter().map(|u| u.merit_history.get(i).map(|p| p.merit)).collect(),
        })
        .collect()
}

/// Whether the trend table should be rendered for this selection.
#[must_use]
pub fn shows_trend(selected: &[&University]) -> bool {
    selected.len() >= TREND_MIN_SELECTED && !merit_trend(selected).is_empty()
}

/// Prompt for the empty compare slot, or `None` when the tray is full.
#[must_use]
pub fn placeholder_text(selected: usize, max: usize) -> Option<String> {
    let remaining = max.checked_sub(selected).filter(|n| *n > 0)?;
    let noun = if remaining == 1 { "university" } else { "universities" };
    Some(format!("Select {remaining} more {noun} to compare"))
}

/// Short legend label: names longer than `max_chars` are cut with an ellipsis.
#[must_use]
pub fn short_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_owned();
    }
    let cut: String = name.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
