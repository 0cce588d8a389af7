#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use catalog::selection::DEFAULT_COMPARE_LIMIT;
use catalog::{CompareSet, Favorites, SelectionError, Toggle};

/// Favorites and compare selections for one page scope.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    pub favorites: Favorites,
    pub compare: CompareSet,
    /// Message shown in the compare tray after a refused add.
    pub notice: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::with_compare_limit(DEFAULT_COMPARE_LIMIT)
    }
}

impl SelectionState {
    #[must_use]
    pub fn with_compare_limit(limit: usize) -> Self {
        Self { favorites: Favorites::new(), compare: CompareSet::with_limit(limit), notice: None }
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Toggle {
        self.favorites.toggle(id)
    }

    /// Toggle compare membership. A refused add records a notice and leaves
    /// the selection unchanged; any successful toggle clears the notice.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::CompareFull`] when the tray is full.
    pub fn toggle_compare(&mut self, id: &str) -> Result<Toggle, SelectionError> {
        match self.compare.toggle(id) {
            Ok(toggle) => {
                self.notice = None;
                Ok(toggle)
            }
            Err(e) => {
                self.notice = Some(capitalize(&e.to_string()));
                Err(e)
            }
        }
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
