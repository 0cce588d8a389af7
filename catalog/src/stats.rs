//! Aggregate catalog figures for the hero section and health endpoint.

use std::collections::HashSet;

use crate::model::University;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub open_admissions: usize,
    /// Mean merit rounded to the nearest whole percent; `0` when empty.
    pub average_merit: u32,
    pub cities: usize,
    /// Distinct degree programs.
    pub programs: usize,
}

impl CatalogStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_universities(universities: &[University]) -> Self {
        let total = universities.len();
        let average_merit = if total == 0 {
            0
        } else {
            let sum: f64 = universities.iter().map(|u| u.merit).sum();
            (sum / total as f64).round().clamp(0.0, f64::from(u32::MAX)) as u32
        };
        Self {
            total,
            open_admissions: universities.iter().filter(|u| u.admission.is_open()).count(),
            average_merit,
            cities: distinct(universities, |u| &u.city),
            programs: distinct(universities, |u| &u.degree),
        }
    }
}

fn distinct<'a>(universities: &'a [University], field: impl Fn(&'a University) -> &'a String) -> usize {
    universities
        .iter()
        .map(field)
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
