//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is loaded and validated once at startup and never mutated, so it
//! is shared behind an `Arc` with no locking.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use catalog::stats::CatalogStats;
use catalog::{Catalog, CatalogError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Shared application state. Clone is required by Axum; fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub stats: Arc<CatalogStats>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let stats = CatalogStats::from_universities(catalog.universities());
        Self { catalog: Arc::new(catalog), stats: Arc::new(stats) }
    }

    /// Read and validate the catalog document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file cannot be read and
    /// [`LoadError::Catalog`] if it is not a valid catalog.
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
        let catalog = catalog::parse_catalog(&json)?;
        Ok(Self::new(catalog))
    }
}
