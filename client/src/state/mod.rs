//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `selection`, `ui`) so individual
//! components can depend on small focused models. Each model is a plain
//! value held in an `RwSignal` provided through Leptos context; the filter
//! criteria signal holds `catalog::FilterCriteria` directly.

pub mod catalog;
pub mod selection;
pub mod ui;
