#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use catalog::Catalog;

/// Loaded dataset plus its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub catalog: Catalog,
    /// True until the one-shot fetch settles.
    pub loading: bool,
    /// Fetch or parse failure, already logged. The catalog is empty when set.
    pub error: Option<String>,
}

impl CatalogState {
    /// State before the fetch has completed.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Settle the fetch. A failure leaves an empty catalog.
    #[must_use]
    pub fn from_result(result: Result<Catalog, String>) -> Self {
        match result {
            Ok(catalog) => Self { catalog, loading: false, error: None },
            Err(e) => Self { catalog: Catalog::default(), loading: false, error: Some(e) },
        }
    }
}
