//! Sort orders for the directory grid.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::University;

/// Error returned when parsing an unknown sort value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct SortKeyError(pub String);

/// Selectable comparator for the directory grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Best national rank first.
    #[default]
    Ranking,
    MeritLow,
    MeritHigh,
    FeeLow,
    FeeHigh,
    /// Case-insensitive A-Z by name.
    Name,
}

impl SortKey {
    pub const ALL: [Self; 6] = [Self::Ranking, Self::MeritLow, Self::MeritHigh, Self::FeeLow, Self::FeeHigh, Self::Name];

    /// Value used in `<select>` options.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ranking => "ranking",
            Self::MeritLow => "merit-low",
            Self::MeritHigh => "merit-high",
            Self::FeeLow => "fee-low",
            Self::FeeHigh => "fee-high",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ranking => "Top Ranked",
            Self::MeritLow => "Merit (Low to High)",
            Self::MeritHigh => "Merit (High to Low)",
            Self::FeeLow => "Fee (Low to High)",
            Self::FeeHigh => "Fee (High to Low)",
            Self::Name => "Name (A-Z)",
        }
    }

    /// Total order of two records under this key.
    #[must_use]
    pub fn compare(self, a: &University, b: &University) -> Ordering {
        match self {
            Self::Ranking => a.ranking.cmp(&b.ranking),
            Self::MeritLow => a.merit.total_cmp(&b.merit),
            Self::MeritHigh => b.merit.total_cmp(&a.merit),
            Self::FeeLow => a.fee.cmp(&b.fee),
            Self::FeeHigh => b.fee.cmp(&a.fee),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }

    /// Stable in-place sort; ties keep their incoming order.
    pub fn sort(self, records: &mut [&University]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SortKeyError(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;
