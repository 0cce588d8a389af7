//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the directory chrome and read/write shared state from
//! Leptos context providers. Cards and the compare tray take their selection
//! through props so pages can own separate compare sets.

pub mod compare_panel;
pub mod eligibility_checker;
pub mod favorites_panel;
pub mod footer;
pub mod header;
pub mod hero_section;
pub mod university_card;
pub mod university_detail_modal;
pub mod university_filters;
