#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for collapsible sections, side panels, and the detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub eligibility_expanded: bool,
    pub filters_expanded: bool,
    pub favorites_open: bool,
    pub compare_open: bool,
    /// Record shown in the detail modal, if any.
    pub detail_id: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            eligibility_expanded: true,
            filters_expanded: false,
            favorites_open: false,
            compare_open: false,
            detail_id: None,
        }
    }
}

impl UiState {
    pub fn show_details(&mut self, id: &str) {
        self.detail_id = Some(id.to_owned());
    }

    pub fn close_details(&mut self) {
        self.detail_id = None;
    }

    /// Open the detail modal from the favorites panel, closing the panel.
    pub fn view_favorite(&mut self, id: &str) {
        self.favorites_open = false;
        self.show_details(id);
    }
}
