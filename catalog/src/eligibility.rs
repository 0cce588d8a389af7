//! Eligibility checker presets.
//!
//! The checker turns a student's marks and budget into directory filters:
//! everything the student qualifies for and can afford, optionally narrowed
//! to one city and discipline.

use crate::filter::{FEE_CEILING, FilterCriteria, MERIT_CEILING, MERIT_FLOOR, parse_facet};

/// Parsed eligibility form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EligibilityInput {
    /// Student's percentage; `0` when the field is blank or invalid.
    pub marks: f64,
    /// Annual budget in PKR; `None` means no cap.
    pub max_fee: Option<u64>,
    pub city: Option<String>,
    pub discipline: Option<String>,
}

impl EligibilityInput {
    /// Build from raw form strings. Unparsable numbers fall back to "no
    /// marks" and "no budget cap"; `"all"` or blank selects clear the facet.
    #[must_use]
    pub fn from_form(marks: &str, max_fee: &str, city: &str, discipline: &str) -> Self {
        let marks = marks
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|m| m.is_finite())
            .map_or(MERIT_FLOOR, |m| m.clamp(MERIT_FLOOR, MERIT_CEILING));
        let max_fee = parse_budget(max_fee);
        Self { marks, max_fee, city: parse_facet(city), discipline: parse_facet(discipline) }
    }

    /// Overwrite the merit ceiling, fee ceiling, city and discipline of
    /// `criteria`. The query, province, fee floor and sort are kept.
    pub fn apply_to(&self, criteria: &mut FilterCriteria) {
        criteria.min_merit = MERIT_FLOOR;
        criteria.max_merit = self.marks;
        criteria.max_fee = self.max_fee.unwrap_or(FEE_CEILING);
        criteria.city.clone_from(&self.city);
        criteria.discipline.clone_from(&self.discipline);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn parse_budget(raw: &str) -> Option<u64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    // Budgets beyond the ceiling behave the same as no cap.
    if value >= FEE_CEILING as f64 {
        return Some(FEE_CEILING);
    }
    Some(value.floor() as u64)
}

#[cfg(test)]
#[path = "eligibility_test.rs"]
mod eligibility_test;
