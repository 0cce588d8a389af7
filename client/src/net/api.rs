//! HTTP helpers for loading the university catalog.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the catalog is fetched
//! by the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings so the index page can show a
//! load error in place of the grid instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::Catalog;

/// Path of the bundled catalog document.
pub const CATALOG_ENDPOINT: &str = "/data/universities.json";

/// Why the catalog request produced no body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchFailure {
    /// The request never completed (network error, CORS, aborted).
    Request(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The response body could not be read as text.
    Body(String),
}

impl FetchFailure {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Request(e) => format!("catalog request failed: {e}"),
            Self::Status(status) => format!("catalog request failed: status {status}"),
            Self::Body(e) => format!("catalog body unreadable: {e}"),
        }
    }
}

/// Validate a fetched catalog body.
///
/// # Errors
///
/// Returns the load error's display text when the body is not a valid
/// catalog document.
pub fn parse_response(body: &str) -> Result<Catalog, String> {
    catalog::parse_catalog(body).map_err(|e| format!("invalid catalog: {e}"))
}

/// Turn the raw fetch outcome into the catalog result, logging it once.
///
/// # Errors
///
/// Returns the failure message for any transport, status, body, or parse
/// failure.
pub fn settle(fetched: Result<String, FetchFailure>) -> Result<Catalog, String> {
    let result = fetched
        .map_err(|failure| failure.message())
        .and_then(|body| parse_response(&body));
    match &result {
        Ok(catalog) => log::info!("catalog loaded: {} universities", catalog.len()),
        Err(e) => log::error!("{e}"),
    }
    result
}

#[cfg(feature = "hydrate")]
async fn request_catalog() -> Result<String, FetchFailure> {
    let resp = gloo_net::http::Request::get(CATALOG_ENDPOINT)
        .send()
        .await
        .map_err(|e| FetchFailure::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchFailure::Status(resp.status()));
    }
    resp.text().await.map_err(|e| FetchFailure::Body(e.to_string()))
}

/// Fetch and parse the catalog from [`CATALOG_ENDPOINT`].
///
/// # Errors
///
/// Returns a message when the request fails, the server answers with a
/// non-success status, or the body does not parse. Every failure is logged.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    #[cfg(feature = "hydrate")]
    {
        settle(request_catalog().await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
