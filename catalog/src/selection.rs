//! Favorites and compare selections.
//!
//! Both selections are insertion-ordered id sets. The compare set carries a
//! capacity; an add that would exceed it is refused and the set is left as
//! it was.

use crate::load::Catalog;
use crate::model::University;

/// Default number of universities that can be compared side by side.
pub const DEFAULT_COMPARE_LIMIT: usize = 3;
/// Capacity used by the discipline page's compare tray.
pub const DISCIPLINE_COMPARE_LIMIT: usize = 4;

/// Outcome of a membership toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("you can compare up to {max} universities at a time")]
    CompareFull { max: usize },
}

// =============================================================================
// FAVORITES
// =============================================================================

/// Saved universities, in the order they were favorited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) -> Toggle {
        if self.remove(id) {
            Toggle::Removed
        } else {
            self.ids.push(id.to_owned());
            Toggle::Added
        }
    }

    /// Remove `id`; returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// COMPARE SET
// =============================================================================

/// Universities selected for side-by-side comparison, bounded by `max`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareSet {
    ids: Vec<String>,
    max: usize,
}

impl Default for CompareSet {
    fn default() -> Self {
        Self::with_limit(DEFAULT_COMPARE_LIMIT)
    }
}

impl CompareSet {
    /// Empty set holding at most `max` ids. A zero limit is raised to one.
    #[must_use]
    pub fn with_limit(max: usize) -> Self {
        Self { ids: Vec::with_capacity(max), max: max.max(1) }
    }

    /// Remove `id` if present, otherwise add it when there is room.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::CompareFull`] when adding would exceed the
    /// limit; the set is unchanged.
    pub fn toggle(&mut self, id: &str) -> Result<Toggle, SelectionError> {
        if self.remove(id) {
            return Ok(Toggle::Removed);
        }
        if self.is_full() {
            return Err(SelectionError::CompareFull { max: self.max });
        }
        self.ids.push(id.to_owned());
        Ok(Toggle::Added)
    }

    /// Remove `id`; returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.max
    }

    /// Free slots left before the limit.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.ids.len())
    }
}

/// Look up selected ids in catalog order, skipping ids the catalog lacks.
#[must_use]
pub fn resolve<'a>(catalog: &'a Catalog, ids: &[String]) -> Vec<&'a University> {
    catalog
        .universities()
        .iter()
        .filter(|u| ids.iter().any(|id| *id == u.id))
        .collect()
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;
