//! Directory filter criteria.
//!
//! DESIGN
//! ======
//! A [`FilterCriteria`] is a plain value: the UI keeps one in a signal and
//! recomputes the visible grid from the full catalog on every change. The
//! result is always the conjunction of every active predicate followed by a
//! stable sort, so there is no incremental state to get out of sync.

use crate::model::University;
use crate::sort::SortKey;

pub const MERIT_FLOOR: f64 = 0.0;
pub const MERIT_CEILING: f64 = 100.0;
pub const FEE_FLOOR: u64 = 0;
pub const FEE_CEILING: u64 = 1_000_000;
/// Slider step for the fee range.
pub const FEE_STEP: u64 = 10_000;

/// Sentinel `<select>` value meaning "no filter".
pub const ALL_OPTION: &str = "all";

/// Search, facet, range, and sort settings for the directory grid.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query matched against name, city, degree, and discipline.
    pub query: String,
    pub city: Option<String>,
    pub discipline: Option<String>,
    pub province: Option<String>,
    pub min_merit: f64,
    pub max_merit: f64,
    pub min_fee: u64,
    pub max_fee: u64,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            city: None,
            discipline: None,
            province: None,
            min_merit: MERIT_FLOOR,
            max_merit: MERIT_CEILING,
            min_fee: FEE_FLOOR,
            max_fee: FEE_CEILING,
            sort: SortKey::default(),
        }
    }
}

impl FilterCriteria {
    /// Whether `u` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, u: &University) -> bool {
        self.matches_query(u)
            && facet_matches(self.city.as_deref(), &u.city)
            && facet_matches(self.discipline.as_deref(), &u.discipline)
            && facet_matches(self.province.as_deref(), &u.province)
            && u.merit >= self.min_merit
            && u.merit <= self.max_merit
            && u.fee >= self.min_fee
            && u.fee <= self.max_fee
    }

    fn matches_query(&self, u: &University) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&u.name, &u.city, &u.degree, &u.discipline]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Matching records in comparator order.
    #[must_use]
    pub fn apply<'a>(&self, universities: &'a [University]) -> Vec<&'a University> {
        let mut visible: Vec<&University> = universities.iter().filter(|u| self.matches(u)).collect();
        self.sort.sort(&mut visible);
        visible
    }

    /// Number of facet and range filters that differ from their defaults.
    /// The query and sort order are not counted.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            self.city.is_some(),
            self.discipline.is_some(),
            self.province.is_some(),
            self.min_merit > MERIT_FLOOR,
            self.max_merit < MERIT_CEILING,
            self.min_fee > FEE_FLOOR,
            self.max_fee < FEE_CEILING,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Restore every setting to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set the merit range, swapping the bounds if they arrive reversed and
    /// clamping both to `0..=100`.
    pub fn set_merit_range(&mut self, min: f64, max: f64) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.min_merit = lo.clamp(MERIT_FLOOR, MERIT_CEILING);
        self.max_merit = hi.clamp(MERIT_FLOOR, MERIT_CEILING);
    }

    /// Set the fee range, swapping the bounds if they arrive reversed and
    /// capping both at the fee ceiling.
    pub fn set_fee_range(&mut self, min: u64, max: u64) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.min_fee = lo.min(FEE_CEILING);
        self.max_fee = hi.min(FEE_CEILING);
    }
}

fn facet_matches(selected: Option<&str>, value: &str) -> bool {
    selected.map_or(true, |s| s == value)
}

/// Interpret a `<select>` value: blank and [`ALL_OPTION`] clear the facet.
#[must_use]
pub fn parse_facet(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == ALL_OPTION {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
