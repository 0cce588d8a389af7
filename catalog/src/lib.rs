//! University catalog model and derived views.
//!
//! This crate owns the record model shared by `client` and the server. It
//! reshapes the static JSON dataset into [`University`] values and provides
//! every derived computation the UI needs: filtering, sorting, favorites and
//! compare selections, eligibility presets, ranking views, merit trends and
//! catalog stats. Nothing here touches the browser or the network.

pub mod compare;
pub mod eligibility;
pub mod filter;
pub mod format;
pub mod load;
pub mod model;
pub mod ranking;
pub mod selection;
pub mod sort;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use filter::FilterCriteria;
pub use load::{Catalog, CatalogError, parse_catalog};
pub use model::{AdmissionStatus, Location, MeritPoint, University};
pub use selection::{CompareSet, Favorites, SelectionError, Toggle};
pub use sort::SortKey;
